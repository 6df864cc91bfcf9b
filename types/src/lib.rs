// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_types
//!
//! A handful of small vocabulary types that the rest of a codebase builds on. There is
//! no I/O, no threading, and no allocation strategy in here. Just values and compile
//! time checks.
//!
//! | Type / item                          | What it is                                                                 |
//! |--------------------------------------|----------------------------------------------------------------------------|
//! | [`OpResult`]                         | Outcome of a fallible operation: `Ok(T)` or `Err` w/ an optional message.  |
//! | [`Slice`]                            | Non-owning, bounds checked view over a contiguous run of elements.         |
//! | [`SliceRef`]                         | Read only [`Slice`]. Many can share the same storage.                      |
//! | [`ForwardIteratorOfType`]            | Trait bound: "re-walkable iterator that yields exactly `T`".               |
//! | [`is_forward_iterator_of_type!`]     | The same question as a `const bool`. `T` or `&T` items both count.         |
//! | [`Index`], [`Length`]                | 0-based position and 1-based size, so the two can't be mixed up.           |
//!
//! # Two kinds of failure
//!
//! 1. **Expected failures** (file not found, parse failed) are data. Return an
//!    [`OpResult`] and let the caller branch on it.
//! 2. **Precondition violations** (calling [`OpResult::unwrap`] on an `Err`, indexing a
//!    [`Slice`] past its length) are bugs in the caller. These panic, after emitting a
//!    [`tracing::error!`] event. Every panicking accessor has a `try_*` sibling that
//!    returns a [`miette::Diagnostic`] error instead.
//!
//! ```
//! use r3bl_types::{OpResult, Slice, error_with_message, ok};
//!
//! fn parse_port(input: &str) -> OpResult<u16, std::num::ParseIntError> {
//!     match input.parse::<u16>() {
//!         Ok(port) => ok(port),
//!         Err(err) => error_with_message(err, "port must be a number"),
//!     }
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert_eq!(parse_port("http").message(), Some("port must be a number"));
//!
//! let mut storage = vec![1, 2, 3, 4, 5];
//! let mut slice = Slice::new(&mut storage);
//! for it in &mut slice {
//!     *it += 1;
//! }
//! assert_eq!(slice[0], 2);
//! assert!(slice.get(10).is_none());
//! assert_eq!(storage, vec![2, 3, 4, 5, 6]);
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod core;

// Re-export.
pub use core::*;
