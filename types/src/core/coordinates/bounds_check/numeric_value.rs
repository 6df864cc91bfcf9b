// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Base traits for numeric conversions - see [`NumericValue`] and [`NumericConversions`].

/// Base trait for reading numeric values from wrapper types.
///
/// This is the minimal interface that lets generic bounds checking code compare an
/// [`Index`] against a [`Length`] without knowing anything else about them.
///
/// [`Index`]: crate::Index
/// [`Length`]: crate::Length
pub trait NumericConversions: Copy + Sized {
    /// Convert to a [`usize`] value for array indexing and size calculations.
    fn as_usize(&self) -> usize;
}

/// Extends [`NumericConversions`] with construction from [`usize`] and ordering. This is
/// what [`crate::IndexOps`] and [`crate::LengthOps`] build on.
///
/// ```rust
/// use r3bl_types::{Length, NumericValue, len};
///
/// fn largest<T: NumericValue>(values: &[T]) -> Option<usize> {
///     values.iter().max().map(|it| it.as_usize())
/// }
///
/// assert_eq!(largest(&[len(3), Length::from(7_usize), len(1)]), Some(7));
/// ```
pub trait NumericValue: NumericConversions + From<usize> + Ord {}
