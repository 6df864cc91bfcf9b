// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Free function shorthands for building an [`OpResult`], so call sites read
//! `return ok(value)` or `return error_with_message(err, "why")`.

use crate::OpResult;

/// Same as [`OpResult::success`].
pub fn ok<T, E>(value: T) -> OpResult<T, E> { OpResult::success(value) }

/// Same as [`OpResult::failure`].
pub fn error<T, E>(error: E) -> OpResult<T, E> { OpResult::failure(error) }

/// Same as [`OpResult::failure_with_message`].
pub fn error_with_message<T, E>(error: E, message: impl AsRef<str>) -> OpResult<T, E> {
    OpResult::failure_with_message(error, message)
}
