// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Walking a [`Slice`] front to back, and its begin / end raw positions.

use std::{ops::Range,
          slice::{Iter, IterMut}};

use crate::Slice;

impl<T> Slice<'_, T> {
    /// Visits exactly `len()` elements, in storage order.
    pub fn iter(&self) -> Iter<'_, T> { self.as_slice().iter() }

    /// Visits exactly `len()` elements, in storage order, allowing each one to be
    /// modified in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// The begin / end raw positions. `end` is one past the last element, so
    /// `start == end` for an empty view. Dereferencing them is up to the caller (and
    /// `unsafe`). Prefer [`Self::iter`].
    #[must_use]
    pub fn as_ptr_range(&self) -> Range<*const T> { self.as_slice().as_ptr_range() }

    /// Mutable flavor of [`Self::as_ptr_range`].
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }
}

impl<'s, T> IntoIterator for &'s Slice<'_, T> {
    type Item = &'s T;
    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'s, T> IntoIterator for &'s mut Slice<'_, T> {
    type Item = &'s mut T;
    type IntoIter = IterMut<'s, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

/// Consumes the view (never the storage). Yields `&'a mut T` for the full lifetime of
/// the borrow.
impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.into_mut_slice().iter_mut() }
}
