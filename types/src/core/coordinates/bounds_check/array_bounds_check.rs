// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Array access bounds checking `[0, length)` - see [`ArrayBoundsCheck`].

use super::{ArrayOverflowResult, LengthOps, NumericValue};

/// Answers "can I access `array[index]`?" for an index type and its paired length type.
///
/// ```
/// use r3bl_types::{ArrayBoundsCheck, ArrayOverflowResult, idx, len};
///
/// let length = len(10);
/// match idx(5).overflows(length) {
///     ArrayOverflowResult::Within => { /* safe access */ }
///     ArrayOverflowResult::Overflowed => unreachable!(),
/// }
/// assert_eq!(idx(0).overflows(len(0)), ArrayOverflowResult::Overflowed);
/// ```
pub trait ArrayBoundsCheck<LengthType: LengthOps<IndexType = Self>>: NumericValue {
    /// Returns [`ArrayOverflowResult::Within`] only when `self < length`. An empty
    /// length rejects every index.
    fn overflows(&self, arg_length: impl Into<LengthType>) -> ArrayOverflowResult {
        let length: LengthType = arg_length.into();
        if self.as_usize() < length.as_usize() {
            ArrayOverflowResult::Within
        } else {
            ArrayOverflowResult::Overflowed
        }
    }
}
