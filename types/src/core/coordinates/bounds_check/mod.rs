// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type-safe bounds checking that eliminates off-by-one errors when indexing into a
//! contiguous run of elements.
//!
//! It is organized as a two-tier architecture:
//! - foundational traits that provide core operations, and
//! - semantic traits that implement specific use case validation.
//!
//! ## Foundational Traits (Core Operations)
//!
//! | Trait                  | File                | Key Items                                         |
//! |------------------------|---------------------|---------------------------------------------------|
//! | [`NumericConversions`] | [`numeric_value`]   | [`as_usize()`]                                    |
//! | [`NumericValue`]       | [`numeric_value`]   | Adds `From<usize>` and `Ord`                      |
//! | [`IndexOps`]           | [`index_ops`]       | `LengthType`, the paired length                   |
//! | [`LengthOps`]          | [`length_ops`]      | `IndexType`, the paired index                     |
//! | [`CheckedIndex`]       | [`checked_index`]   | [`to_checked_index()`], [`raw_value()`]           |
//!
//! ## Semantic Traits (Use Case Validation)
//!
//! | Trait                | File                       | Key Question                                  |
//! |----------------------|----------------------------|-----------------------------------------------|
//! | [`ArrayBoundsCheck`] | [`array_bounds_check`]     | "Can I access array`[index]` correctly?"      |
//! | [`RangeBoundsExt`]   | [`range_bounds_check_ext`] | "Is this [`Range`] valid for this length?"    |
//!
//! ## Interval Notation
//!
//! - `[0, length)` is the set of valid indices for element access. `index == length` is
//!   already out of bounds.
//! - A `Range` `start..end` is exclusive at the end, so `end == length` is fine.
//!
//! ```
//! use r3bl_types::{ArrayBoundsCheck, ArrayOverflowResult, idx, len};
//!
//! let length = len(5);
//! assert_eq!(idx(4).overflows(length), ArrayOverflowResult::Within);
//! assert_eq!(idx(5).overflows(length), ArrayOverflowResult::Overflowed);
//! ```
//!
//! ## Negative indices
//!
//! Raw integers reach the bounds checks only through [`CheckedIndex`]. A negative value
//! never becomes an [`Index`], so it can't wrap around into something that looks like a
//! huge (or worse, small) valid position.
//!
//! ```
//! use r3bl_types::{CheckedIndex, idx};
//!
//! assert_eq!(3_i32.to_checked_index(), Some(idx(3)));
//! assert_eq!((-10_i32).to_checked_index(), None);
//! assert_eq!((-1_i64).to_checked_index(), None);
//! ```
//!
//! [`Index`]: crate::Index
//! [`Range`]: std::ops::Range
//! [`as_usize()`]: crate::NumericConversions::as_usize
//! [`to_checked_index()`]: crate::CheckedIndex::to_checked_index
//! [`raw_value()`]: crate::CheckedIndex::raw_value

// Attach.
pub mod array_bounds_check;
pub mod checked_index;
pub mod index_ops;
pub mod length_ops;
pub mod numeric_value;
pub mod range_bounds_check_ext;
pub mod result_enums;

// Re-export.
pub use array_bounds_check::*;
pub use checked_index::*;
pub use index_ops::*;
pub use length_ops::*;
pub use numeric_value::*;
pub use range_bounds_check_ext::*;
pub use result_enums::*;
