// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Be careful when adjusting these tuning parameters. Smaller static allocation sizes
//! are better than larger ones. Diagnostic messages attached to an
//! [`crate::OpResult`] are usually a handful of words, and anything longer simply spills
//! onto the heap.

use smallstr::SmallString;

// PERF: If you make this number too large then every `OpResult::Err` gets that much
// bigger, even the ones without a message.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be spilled on the heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;
