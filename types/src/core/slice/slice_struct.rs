// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{ArrayBoundsCheck, ArrayOverflowResult, CheckedIndex, DEBUG_TYPES_MOD,
            ForwardIteratorOfType, Index, Length, RangeBoundsExt, RangeValidityStatus,
            SliceError, idx, len};

/// A non-owning, bounds checked view over `len()` contiguous elements. See the
/// [module docs](crate::slice) for an overview.
///
/// The `'a` lifetime ties the view to the storage it borrows. The storage must outlive
/// the view, and the compiler enforces it.
#[derive(Debug)]
pub struct Slice<'a, T> {
    data: &'a mut [T],
}

/// An empty view. It refers to no storage, and every access is out of range.
impl<T> Default for Slice<'_, T> {
    fn default() -> Self {
        Self {
            data: <&mut [T]>::default(),
        }
    }
}

mod construct {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<'a, T> Slice<'a, T> {
        /// View all of `storage`. Nothing is copied or allocated.
        pub fn new(storage: &'a mut [T]) -> Self { Self { data: storage } }

        /// View `length` elements of `storage`, beginning at `start`. This is the
        /// "(address, length)" form of construction, w/ the address expressed as an
        /// offset into storage that the caller has borrowed.
        ///
        /// A zero `length` at `start == storage.len()` is valid and selects nothing.
        ///
        /// # Errors
        ///
        /// [`SliceError::InvalidRange`] if `start + length` doesn't fit in `storage`.
        pub fn try_from_parts(
            storage: &'a mut [T],
            arg_start: impl Into<Index>,
            arg_length: impl Into<Length>,
        ) -> Result<Self, SliceError> {
            let start: Index = arg_start.into();
            let length: Length = arg_length.into();
            let end = idx(start.as_usize().saturating_add(length.as_usize()));
            let storage_length = len(storage.len());

            match (start..end).check_range_is_valid_for_length(storage_length) {
                RangeValidityStatus::Valid => Ok(Self::new(
                    &mut storage[start.as_usize()..end.as_usize()],
                )),
                status => {
                    DEBUG_TYPES_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "Slice::try_from_parts() -> invalid range",
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

    impl<'a, T> From<&'a mut [T]> for Slice<'a, T> {
        fn from(storage: &'a mut [T]) -> Self { Self::new(storage) }
    }

    impl<'a, T, const N: usize> From<&'a mut [T; N]> for Slice<'a, T> {
        fn from(storage: &'a mut [T; N]) -> Self { Self::new(storage) }
    }

    impl<'a, T> From<&'a mut Vec<T>> for Slice<'a, T> {
        fn from(storage: &'a mut Vec<T>) -> Self { Self::new(storage) }
    }
}

mod size {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Slice<'_, T> {
        #[must_use]
        pub fn len(&self) -> Length { len(self.data.len()) }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.data.is_empty() }
    }
}

mod access {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Slice<'_, T> {
        /// # Errors
        ///
        /// [`SliceError::IndexOutOfRange`] unless `0 <= index < len()`.
        pub fn try_at(&self, arg_index: impl CheckedIndex) -> Result<&T, SliceError> {
            let index = check_index(self.len(), arg_index)?;
            Ok(&self.data[index.as_usize()])
        }

        /// # Errors
        ///
        /// [`SliceError::IndexOutOfRange`] unless `0 <= index < len()`.
        pub fn try_at_mut(
            &mut self,
            arg_index: impl CheckedIndex,
        ) -> Result<&mut T, SliceError> {
            let index = check_index(self.len(), arg_index)?;
            Ok(&mut self.data[index.as_usize()])
        }

        #[must_use]
        pub fn get(&self, arg_index: impl CheckedIndex) -> Option<&T> {
            self.try_at(arg_index).ok()
        }

        pub fn get_mut(&mut self, arg_index: impl CheckedIndex) -> Option<&mut T> {
            self.try_at_mut(arg_index).ok()
        }

        /// # Panics
        ///
        /// Unless `0 <= index < len()`. A [`tracing::error!`] event is emitted first.
        #[track_caller]
        pub fn at(&self, arg_index: impl CheckedIndex) -> &T {
            match self.try_at(arg_index) {
                Ok(it) => it,
                Err(error) => panic_on_violation("Slice::at()", error),
            }
        }

        /// # Panics
        ///
        /// Unless `0 <= index < len()`. A [`tracing::error!`] event is emitted first.
        #[track_caller]
        pub fn at_mut(&mut self, arg_index: impl CheckedIndex) -> &mut T {
            match self.try_at_mut(arg_index) {
                Ok(it) => it,
                Err(error) => panic_on_violation("Slice::at_mut()", error),
            }
        }

        #[must_use]
        pub fn as_slice(&self) -> &[T] { self.data }

        pub fn as_mut_slice(&mut self) -> &mut [T] { self.data }
    }

    impl<'a, T> Slice<'a, T> {
        /// Give back the underlying borrow, for the full `'a` lifetime.
        #[must_use]
        pub fn into_mut_slice(self) -> &'a mut [T] { self.data }
    }

    /// The only place an incoming index is compared against a length. Anything that
    /// [`CheckedIndex`] can't turn into an [`Index`] (ie, negative) is out of range.
    /// Shared w/ [`crate::SliceRef`].
    pub(in crate::core::slice) fn check_index(
        length: Length,
        arg_index: impl CheckedIndex,
    ) -> Result<Index, SliceError> {
        match arg_index.to_checked_index() {
            Some(index) if index.overflows(length) == ArrayOverflowResult::Within => {
                Ok(index)
            }
            _ => Err(SliceError::IndexOutOfRange {
                index: arg_index.raw_value(),
                length,
            }),
        }
    }

    #[track_caller]
    pub(in crate::core::slice) fn panic_on_violation(
        accessor: &str,
        error: SliceError,
    ) -> ! {
        let location = std::panic::Location::caller();
        // % is Display, ? is Debug.
        tracing::error!(
            message = "Slice access out of range",
            accessor = %accessor,
            error = %error,
            location = %location,
        );
        panic!("{accessor}: {error}");
    }
}

pub(in crate::core::slice) use access::{check_index, panic_on_violation};

mod reshape {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T> Slice<'_, T> {
        /// A narrower view over `range` of this one. This view is borrowed for as long as
        /// the returned one lives.
        ///
        /// # Errors
        ///
        /// [`SliceError::InvalidRange`] if `range` is inverted or extends past `len()`.
        pub fn sub_slice(&mut self, range: Range<Index>) -> Result<Slice<'_, T>, SliceError> {
            let storage_length = self.len();
            match range.check_range_is_valid_for_length(storage_length) {
                RangeValidityStatus::Valid => Ok(Slice::new(
                    &mut self.data[range.start.as_usize()..range.end.as_usize()],
                )),
                status => {
                    DEBUG_TYPES_MOD.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(
                            message = "Slice::sub_slice() -> invalid range",
                            status = ?status,
                            range = ?range,
                            storage_length = ?storage_length,
                        );
                    });
                    Err(SliceError::InvalidRange {
                        status,
                        start: range.start,
                        end: range.end,
                        storage_length,
                    })
                }
            }
        }

        /// Overwrite every element w/ the items of `source`, in order.
        ///
        /// `source` is counted on a clone first, stopping one item past `len()`, so an
        /// endless source is refused rather than walked forever. If it doesn't yield
        /// exactly `len()` items, nothing is written.
        ///
        /// # Errors
        ///
        /// [`SliceError::LengthMismatch`] if the counts differ.
        pub fn fill_from(
            &mut self,
            source: impl ForwardIteratorOfType<T>,
        ) -> Result<(), SliceError> {
            let expected = self.len();
            let actual = len(
                source
                    .clone()
                    .take(expected.as_usize().saturating_add(1))
                    .count(),
            );

            if actual != expected {
                DEBUG_TYPES_MOD.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "Slice::fill_from() -> length mismatch",
                        expected = ?expected,
                        actual = ?actual,
                    );
                });
                return Err(SliceError::LengthMismatch { expected, actual });
            }

            for (slot, value) in self.data.iter_mut().zip(source) {
                *slot = value;
            }

            Ok(())
        }
    }
}
