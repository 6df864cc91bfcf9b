// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`] wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::OpResult::into_miette_result`], and with the
///   diagnostic error types in this crate ([`crate::SliceError`],
///   [`crate::OpResultAccessError`]), which can be turned into a report with `?`.
///
/// # Example
///
/// ```
/// use r3bl_types::{CommonResult, Slice, idx};
///
/// fn first_two(storage: &mut [i32]) -> CommonResult<(i32, i32)> {
///     let slice = Slice::new(storage);
///     let first = *slice.try_at(idx(0))?;
///     let second = *slice.try_at(idx(1))?;
///     Ok((first, second))
/// }
///
/// assert_eq!(first_two(&mut [7, 8, 9]).unwrap(), (7, 8));
/// assert!(first_two(&mut [7]).is_err());
/// ```
pub type CommonResult<T> = miette::Result<T>;
