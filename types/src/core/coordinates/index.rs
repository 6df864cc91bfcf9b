// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Zero-based element position - see [`Index`] type.

use super::Length;
use crate::{ArrayBoundsCheck, IndexOps, NumericConversions, NumericValue};
use std::{fmt::{Debug, Formatter, Result},
          hash::Hash};

/// Represents a 0-based position of an element in a contiguous run of elements.
///
/// The relationship between [`Index`] and [`Length`] is that:
/// - A `Length` is 1-based (starts from 1)
/// - An `Index` is 0-based (starts from 0)
/// - The last valid index in a run with length L is L-1
///
/// `Index` values can be created using [`Index::new`], the [`idx`] function, or by
/// converting from unsigned integers. There is deliberately no conversion from signed
/// integers, since a negative value has no meaningful position. Use
/// [`crate::CheckedIndex`] to turn a signed value into an `Option<Index>`.
///
/// # Examples
///
/// ```
/// use r3bl_types::{Index, idx};
///
/// let index1 = Index::new(5_usize);
/// let index2 = idx(5);
/// let index3 = Index::from(5_u16);
///
/// assert_eq!(index1, index2);
/// assert_eq!(index2, index3);
/// assert_eq!(format!("{index1:?}"), "Index(5)");
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Index(pub usize);

/// Creates a new [`Index`] from a [`usize`].
#[must_use]
pub fn idx(arg_index: usize) -> Index { Index(arg_index) }

impl Debug for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "Index({:?})", self.0) }
}

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Index {
        pub fn new(arg_index: impl Into<Index>) -> Self { arg_index.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<usize> for Index {
        fn from(val: usize) -> Self { Index(val) }
    }

    impl From<u32> for Index {
        fn from(val: u32) -> Self { Index(val as usize) }
    }

    impl From<u16> for Index {
        fn from(val: u16) -> Self { Index(val.into()) }
    }

    impl From<u8> for Index {
        fn from(val: u8) -> Self { Index(val.into()) }
    }

    impl From<Index> for usize {
        fn from(index: Index) -> Self { index.0 }
    }
}

mod bounds_check_trait_impls {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl NumericConversions for Index {
        fn as_usize(&self) -> usize { self.0 }
    }

    impl NumericValue for Index {}

    impl IndexOps for Index {
        type LengthType = Length;
    }

    impl ArrayBoundsCheck<Length> for Index {}
}
