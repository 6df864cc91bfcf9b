// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Range validation - see [`RangeBoundsExt`].
//!
//! Ranges here are always exclusive at the end (`start..end`), which is what slicing
//! uses. The two ends are checked differently:
//! - The **end** of a range may equal the length (`0..len` selects everything).
//! - The **start** of a range may equal the length only when the range is empty, which
//!   selects nothing at the very end.

use super::{IndexOps, NumericConversions, RangeValidityStatus};
use std::ops::Range;

/// Extension trait for validating a [`Range`] of index types against a length.
///
/// ```
/// use r3bl_types::{RangeBoundsExt, RangeValidityStatus, idx, len};
///
/// // Empty range at the very end is fine.
/// assert_eq!(
///     (idx(5)..idx(5)).check_range_is_valid_for_length(len(5)),
///     RangeValidityStatus::Valid
/// );
///
/// // One past the end is not.
/// assert_eq!(
///     (idx(6)..idx(6)).check_range_is_valid_for_length(len(5)),
///     RangeValidityStatus::StartOutOfBounds
/// );
/// ```
pub trait RangeBoundsExt {
    /// The index type contained in this range.
    type IndexType: IndexOps;

    /// Check if this range is valid for the given length.
    ///
    /// # Returns
    ///
    /// [`RangeValidityStatus`] indicating validity or the specific failure reason. The
    /// checks run in this order: inverted, start out of bounds, end out of bounds.
    fn check_range_is_valid_for_length(
        &self,
        arg_length: impl Into<<Self::IndexType as IndexOps>::LengthType>,
    ) -> RangeValidityStatus;
}

impl<I> RangeBoundsExt for Range<I>
where
    I: IndexOps,
{
    type IndexType = I;

    fn check_range_is_valid_for_length(
        &self,
        arg_length: impl Into<I::LengthType>,
    ) -> RangeValidityStatus {
        let length: I::LengthType = arg_length.into();
        let length = length.as_usize();
        let (start, end) = (self.start.as_usize(), self.end.as_usize());

        // Check for inverted ranges (start > end).
        if start > end {
            return RangeValidityStatus::Inverted;
        }

        if start > length {
            return RangeValidityStatus::StartOutOfBounds;
        }

        // End can be equal to length for exclusive ranges.
        if end > length {
            return RangeValidityStatus::EndOutOfBounds;
        }

        RangeValidityStatus::Valid
    }
}
