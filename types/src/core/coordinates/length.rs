// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One-based size measurements - see [`Length`] type.

use super::Index;
use crate::{LengthOps, NumericConversions, NumericValue};
use std::{fmt::{Debug, Formatter, Result},
          hash::Hash};

/// Represents the number of elements in a contiguous run of elements.
///
/// A `Length` is a 1-based measurement (as opposed to 0-based indices). A `Length` of 0
/// means "empty", and no [`Index`] is valid for element access against it.
///
/// # Examples
///
/// ```
/// use r3bl_types::{ArrayBoundsCheck, ArrayOverflowResult, Length, idx, len};
///
/// let length1 = Length::new(10_usize);
/// let length2 = len(10);
///
/// assert_eq!(length1, length2);
/// assert_eq!(idx(9).overflows(length1), ArrayOverflowResult::Within);
/// assert_eq!(idx(10).overflows(length1), ArrayOverflowResult::Overflowed);
/// ```
#[derive(Copy, Clone, PartialEq, PartialOrd, Ord, Eq, Hash, Default)]
pub struct Length(pub usize);

/// Creates a new [`Length`] from a [`usize`].
#[must_use]
pub fn len(arg_length: usize) -> Length { Length(arg_length) }

impl Debug for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "Length({:?})", self.0) }
}

mod impl_core {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl Length {
        pub fn new(arg_length: impl Into<Length>) -> Self { arg_length.into() }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }
}

mod impl_from_numeric {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl From<usize> for Length {
        fn from(val: usize) -> Self { Length(val) }
    }

    impl From<u32> for Length {
        fn from(val: u32) -> Self { Length(val as usize) }
    }

    impl From<u16> for Length {
        fn from(val: u16) -> Self { Length(val.into()) }
    }

    impl From<u8> for Length {
        fn from(val: u8) -> Self { Length(val.into()) }
    }

    impl From<Length> for usize {
        fn from(length: Length) -> Self { length.0 }
    }
}

mod bounds_check_trait_impls {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl NumericConversions for Length {
        fn as_usize(&self) -> usize { self.0 }
    }

    impl NumericValue for Length {}

    impl LengthOps for Length {
        type IndexType = Index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_creation() {
        assert_eq!(Length::new(10_usize), len(10));
        assert_eq!(Length::from(20_u16), len(20));
        assert_eq!(Length::from(20_u8), len(20));
    }

    #[test]
    fn test_length_debug() {
        assert_eq!(format!("{:?}", len(7)), "Length(7)");
    }
}
