// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bridges between [`OpResult`], [`std::result::Result`], and [`miette::Result`].
//!
//! Going to a plain [`Result`] drops the diagnostic message. Going to a
//! [`miette::Result`] keeps it, as context wrapped around the error.

use miette::{IntoDiagnostic, WrapErr};

use crate::{CommonResult, OpResult};

impl<T, E> From<Result<T, E>> for OpResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }
}

impl<T, E> From<OpResult<T, E>> for Result<T, E> {
    fn from(op_result: OpResult<T, E>) -> Self { op_result.into_result() }
}

impl<T, E> OpResult<T, E> {
    /// Convert to a plain [`Result`]. The diagnostic message, if any, is dropped.
    ///
    /// # Errors
    ///
    /// If this is `Err`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err { error, .. } => Err(error),
        }
    }

    /// Convert to a [`CommonResult`] so it can be bubbled up w/ `?` in code that uses
    /// [`miette`]. The message (if present) becomes the outermost context of the report,
    /// and the error is its source.
    ///
    /// ```
    /// use r3bl_types::{OpResult, error_with_message};
    ///
    /// let res: OpResult<(), std::fmt::Error> = error_with_message(std::fmt::Error, "render");
    /// let report = res.into_miette_result().unwrap_err();
    /// assert_eq!(report.to_string(), "render");
    /// ```
    ///
    /// # Errors
    ///
    /// If this is `Err`.
    pub fn into_miette_result(self) -> CommonResult<T>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err {
                error,
                message: None,
            } => Err::<T, E>(error).into_diagnostic(),
            Self::Err {
                error,
                message: Some(message),
            } => Err::<T, E>(error)
                .into_diagnostic()
                .wrap_err(message.to_string()),
        }
    }
}
