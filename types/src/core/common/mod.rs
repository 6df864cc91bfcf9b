// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// This is the global `DEBUG` const for this crate.
///
/// If set to `true`, recoverable failures (a [`crate::Slice`] that can't be carved out of
/// its storage, a [`crate::Slice::fill_from`] length mismatch, etc) emit
/// [`tracing::debug!`] events. Precondition violations that are about to panic always
/// emit a [`tracing::error!`] event, regardless of this flag.
pub const DEBUG_TYPES_MOD: bool = false;

// Attach sources.
pub mod common_result_and_error;
pub mod sizes;

// Re-export.
pub use common_result_and_error::*;
pub use sizes::*;
