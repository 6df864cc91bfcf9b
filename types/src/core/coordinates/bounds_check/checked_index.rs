// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion of raw integers into an [`Index`] that can't wrap - see [`CheckedIndex`].

use crate::{Index, idx};
use std::fmt::Debug;

/// Anything that can be used to index into a [`crate::Slice`].
///
/// A signed integer that is negative, or an unsigned integer that doesn't fit in a
/// [`usize`], has no position. [`to_checked_index()`] returns [`None`] for these, instead
/// of the value being cast (and silently wrapped) into a `usize`. The bounds check then
/// only ever compares values that went through this conversion, so `-1` can't sneak in
/// as `usize::MAX` (or anything else).
///
/// ```
/// use r3bl_types::{CheckedIndex, idx};
///
/// assert_eq!(4_usize.to_checked_index(), Some(idx(4)));
/// assert_eq!(4_u8.to_checked_index(), Some(idx(4)));
/// assert_eq!(idx(4).to_checked_index(), Some(idx(4)));
/// assert_eq!((-10_isize).to_checked_index(), None);
/// assert_eq!((-10_i32).raw_value(), -10);
/// ```
///
/// [`to_checked_index()`]: CheckedIndex::to_checked_index
pub trait CheckedIndex: Copy + Debug {
    /// [`None`] when the value does not denote a position.
    fn to_checked_index(self) -> Option<Index>;

    /// The value as it was passed in, for diagnostics. Saturates at [`i128::MAX`].
    fn raw_value(self) -> i128;
}

impl CheckedIndex for Index {
    fn to_checked_index(self) -> Option<Index> { Some(self) }

    fn raw_value(self) -> i128 { self.as_usize().raw_value() }
}

/// Integer types whose every value fits in an [`i128`].
macro_rules! impl_checked_index_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CheckedIndex for $ty {
                fn to_checked_index(self) -> Option<Index> {
                    usize::try_from(self).ok().map(idx)
                }

                fn raw_value(self) -> i128 { i128::from(self) }
            }
        )*
    };
}

/// Integer types that may not fit in an [`i128`] on every target.
macro_rules! impl_checked_index_saturating {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CheckedIndex for $ty {
                fn to_checked_index(self) -> Option<Index> {
                    usize::try_from(self).ok().map(idx)
                }

                fn raw_value(self) -> i128 { i128::try_from(self).unwrap_or(i128::MAX) }
            }
        )*
    };
}

impl_checked_index_lossless!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_checked_index_saturating!(usize, isize);
