// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`SliceRef`] is the read only sibling of [`Slice`]. It borrows its storage w/ `&`
//! instead of `&mut`, so any number of them can look at the same storage at once.

use std::{ops::{self, Range},
          slice::Iter};

use super::slice_struct::{check_index, panic_on_violation};
use crate::{CheckedIndex, DEBUG_TYPES_MOD, Index, Length, RangeBoundsExt,
            RangeValidityStatus, Slice, SliceError, idx, len};

/// A non-owning, bounds checked, read only view over `len()` contiguous elements.
///
/// Access is checked exactly like [`Slice`]: negative and past the end indices are
/// refused. It is deliberately not [`Clone`] or [`Copy`]. Make another view from the
/// storage (or w/ [`Slice::as_slice_ref`]) when a second one is needed.
///
/// ```
/// use r3bl_types::SliceRef;
///
/// let storage = vec![1, 2, 3];
/// let first = SliceRef::from(&storage);
/// let second = SliceRef::from(&storage);
///
/// assert_eq!(first[0], second[0]);
/// assert!(first.get(-1).is_none());
/// assert_eq!(second.iter().sum::<i32>(), 6);
/// ```
///
/// ```compile_fail
/// use r3bl_types::SliceRef;
///
/// let storage = [1, 2, 3];
/// let view = SliceRef::new(&storage);
/// let copy = view.clone();
/// ```
#[derive(Debug)]
pub struct SliceRef<'a, T> {
    data: &'a [T],
}

/// An empty view. Every access is out of range.
impl<T> Default for SliceRef<'_, T> {
    fn default() -> Self {
        Self {
            data: <&[T]>::default(),
        }
    }
}

mod construct {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> SliceRef<'a, T> {
        #[must_use]
        pub fn new(storage: &'a [T]) -> Self { Self { data: storage } }

        /// View `length` elements of `storage`, beginning at `start`.
        ///
        /// # Errors
        ///
        /// [`SliceError::InvalidRange`] if `start + length` doesn't fit in `storage`.
        pub fn try_from_parts(
            storage: &'a [T],
            arg_start: impl Into<Index>,
            arg_length: impl Into<Length>,
        ) -> Result<Self, SliceError> {
            let start: Index = arg_start.into();
            let length: Length = arg_length.into();
            let end = idx(start.as_usize().saturating_add(length.as_usize()));
            let storage_length = len(storage.len());

            match (start..end).check_range_is_valid_for_length(storage_length) {
                RangeValidityStatus::Valid => {
                    Ok(Self::new(&storage[start.as_usize()..end.as_usize()]))
                }
                status => {
                    DEBUG_TYPES_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "SliceRef::try_from_parts() -> invalid range",
                            status = ?status,
                            start = ?start,
                            length = ?length,
                            storage_length = ?storage_length,
                        );
                    });
                    Err(SliceError::InvalidRange {
                        status,
                        start,
                        end,
                        storage_length,
                    })
                }
            }
        }
    }

    impl<'a, T> From<&'a [T]> for SliceRef<'a, T> {
        fn from(storage: &'a [T]) -> Self { Self::new(storage) }
    }

    impl<'a, T, const N: usize> From<&'a [T; N]> for SliceRef<'a, T> {
        fn from(storage: &'a [T; N]) -> Self { Self::new(storage) }
    }

    impl<'a, T> From<&'a Vec<T>> for SliceRef<'a, T> {
        fn from(storage: &'a Vec<T>) -> Self { Self::new(storage) }
    }

    /// Give up write access. The result keeps the full `'a` borrow.
    impl<'a, T> From<Slice<'a, T>> for SliceRef<'a, T> {
        fn from(slice: Slice<'a, T>) -> Self { Self::new(slice.into_mut_slice()) }
    }

    impl<T> Slice<'_, T> {
        /// A read only view over the same elements, for as long as this one is not
        /// written to.
        #[must_use]
        pub fn as_slice_ref(&self) -> SliceRef<'_, T> { SliceRef::new(self.as_slice()) }
    }
}

mod access {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> SliceRef<'a, T> {
        #[must_use]
        pub fn len(&self) -> Length { len(self.data.len()) }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.data.is_empty() }

        /// The returned reference borrows the storage, not this view.
        ///
        /// # Errors
        ///
        /// [`SliceError::IndexOutOfRange`] unless `0 <= index < len()`.
        pub fn try_at(&self, arg_index: impl CheckedIndex) -> Result<&'a T, SliceError> {
            let index = check_index(self.len(), arg_index)?;
            Ok(&self.data[index.as_usize()])
        }

        #[must_use]
        pub fn get(&self, arg_index: impl CheckedIndex) -> Option<&'a T> {
            self.try_at(arg_index).ok()
        }

        /// # Panics
        ///
        /// Unless `0 <= index < len()`. A [`tracing::error!`] event is emitted first.
        #[track_caller]
        pub fn at(&self, arg_index: impl CheckedIndex) -> &'a T {
            match self.try_at(arg_index) {
                Ok(it) => it,
                Err(error) => panic_on_violation("SliceRef::at()", error),
            }
        }

        #[must_use]
        pub fn as_slice(&self) -> &'a [T] { self.data }

        /// Visits exactly `len()` elements, in storage order.
        pub fn iter(&self) -> Iter<'a, T> { self.data.iter() }

        /// See [`Slice::as_ptr_range`].
        #[must_use]
        pub fn as_ptr_range(&self) -> Range<*const T> { self.data.as_ptr_range() }
    }

    impl<T, I: CheckedIndex> ops::Index<I> for SliceRef<'_, T> {
        type Output = T;

        #[track_caller]
        fn index(&self, arg_index: I) -> &T { self.at(arg_index) }
    }

    impl<'a, T> IntoIterator for &SliceRef<'a, T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.iter() }
    }

    impl<'a, T> IntoIterator for SliceRef<'a, T> {
        type Item = &'a T;
        type IntoIter = Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.data.iter() }
    }
}
