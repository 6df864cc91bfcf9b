// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`OpResult`] represents the outcome of a fallible operation without using panics (or
//! exceptions) for control flow. It is exactly one of:
//! - `Ok(value)`, or
//! - `Err { error, message }`, where `message` is optional diagnostic text.
//!
//! It is a closed sum type, so a value with both payloads (or neither) can't be built.
//! Once constructed it never changes arm.
//!
//! ```
//! use r3bl_types::{OpResult, OperationType, error, error_with_message, ok};
//!
//! let res: OpResult<i32, i32> = ok(10);
//! assert_eq!(res.operation_type(), OperationType::Ok);
//! assert_eq!(res.unwrap(), 10);
//!
//! let res: OpResult<i32, i32> = error(2);
//! assert_eq!(res.operation_type(), OperationType::Err);
//! assert_eq!(res.message(), None);
//! assert_eq!(res.unwrap_error(), 2);
//!
//! let res: OpResult<i32, i32> = error_with_message(2, "Error message");
//! assert_eq!(res.message(), Some("Error message"));
//! ```

// Attach sources.
pub mod op_result_constructors;
pub mod op_result_conversions;
pub mod op_result_error;
pub mod op_result_struct;
pub mod operation_type;

// Re-export.
pub use op_result_constructors::*;
pub use op_result_conversions::*;
pub use op_result_error::*;
pub use op_result_struct::*;
pub use operation_type::*;
