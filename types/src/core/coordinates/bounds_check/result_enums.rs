// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module provides several result enums for different bounds checking scenarios:
//! - [`ArrayOverflowResult`] - Results for simple array access bounds checking (within,
//!   overflow)
//! - [`RangeValidityStatus`] - Results for validating range structure against a length

/// Result of simple array access bounds checking `[0, length)`.
///
/// Returned by [`overflows()`]. Only two variants, because array access always starts
/// at index 0. There's no concept of "underflow" when checking `[0, length)`.
///
/// [`overflows()`]: crate::ArrayBoundsCheck::overflows
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArrayOverflowResult {
    /// Index is within valid bounds for array access.
    Within,

    /// Index has overflowed (is at or beyond the length).
    Overflowed,
}

/// Result of range structure validation.
///
/// Captures WHY a range might be invalid for a given length, so callers can report a
/// precise error without re-checking.
///
/// ```
/// use r3bl_types::{RangeBoundsExt, RangeValidityStatus, idx, len};
///
/// let length = len(10);
/// assert_eq!((idx(2)..idx(7)).check_range_is_valid_for_length(length), RangeValidityStatus::Valid);
/// assert_eq!((idx(8)..idx(3)).check_range_is_valid_for_length(length), RangeValidityStatus::Inverted);
/// assert_eq!((idx(15)..idx(20)).check_range_is_valid_for_length(length), RangeValidityStatus::StartOutOfBounds);
/// assert_eq!((idx(5)..idx(15)).check_range_is_valid_for_length(length), RangeValidityStatus::EndOutOfBounds);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RangeValidityStatus {
    /// Range is well-formed and valid for the given length.
    Valid,

    /// Range is inverted (start > end).
    Inverted,

    /// Start index is beyond the length (start > length).
    StartOutOfBounds,

    /// Exclusive end index is beyond the length (end > length).
    EndOutOfBounds,
}
