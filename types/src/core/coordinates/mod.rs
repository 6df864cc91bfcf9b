// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! 0-based positions and 1-based sizes for anything that is indexed, plus the bounds
//! checking traits that compare them.
//!
//! # Core Types
//!
//! - [`Index`]: 0-based position, made with [`idx()`].
//! - [`Length`]: 1-based size / count, made with [`len()`].
//!
//! The last valid index in something with length `L` is `L - 1`. An index is valid for
//! element access only when `index < length`. See [`bounds_check`] for the traits that
//! enforce this, and [`CheckedIndex`] for how raw (possibly negative) integers are turned
//! into an [`Index`] without wrapping around.
//!
//! [`CheckedIndex`]: crate::CheckedIndex

// Attach source files.
pub mod bounds_check;
pub mod index;
pub mod length;

// Re-export types and constructors.
pub use bounds_check::*;
pub use index::*;
pub use length::*;
