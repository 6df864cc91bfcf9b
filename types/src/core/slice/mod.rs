// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Slice`] is a non-owning, bounds checked view over a contiguous run of elements. It
//! is a start address and a length (a fat pointer), borrowed from whatever storage
//! created it.
//!
//! - Every access is checked against the length. Indices go through
//!   [`crate::CheckedIndex`] first, so a negative value is out of range, rather than
//!   wrapping into something that looks valid.
//! - It is not [`Clone`] or [`Copy`]. It holds a `&mut` borrow, so the compiler rejects a
//!   second live view over the same storage.
//! - Dropping it never touches the storage.
//!
//! [`SliceRef`] is the read only flavor. It holds a `&` borrow, so many of them can share
//! the same storage, and it has the same checked access.
//!
//! ```
//! use r3bl_types::{Slice, idx};
//!
//! let mut storage = [1, 2, 3, 4, 5];
//! let mut slice = Slice::new(&mut storage);
//!
//! assert_eq!(slice[0], 1);
//! assert_eq!(*slice.at(idx(4)), 5);
//! assert!(slice.try_at(10).is_err());
//! assert!(slice.get(-1).is_none());
//!
//! slice[2] = 30;
//! assert_eq!(storage, [1, 2, 30, 4, 5]);
//! ```
//!
//! Two live views over the same storage don't compile.
//!
//! ```compile_fail
//! use r3bl_types::Slice;
//!
//! let mut storage = [1, 2, 3];
//! let first = Slice::new(&mut storage);
//! let second = Slice::new(&mut storage);
//! drop((first, second));
//! ```
//!
//! And a view can't be duplicated.
//!
//! ```compile_fail
//! use r3bl_types::Slice;
//!
//! let mut storage = [1, 2, 3];
//! let first = Slice::new(&mut storage);
//! let second = first.clone();
//! ```

// Attach sources.
pub mod slice_error;
pub mod slice_index;
pub mod slice_iter;
pub mod slice_ref;
pub mod slice_struct;

// Re-export.
pub use slice_error::*;
pub use slice_iter::*;
pub use slice_ref::*;
pub use slice_struct::*;
