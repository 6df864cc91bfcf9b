// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pairs a 1-based length type w/ its index type - see [`LengthOps`].

use super::{IndexOps, NumericValue};

/// A 1-based size, tied to the one index type it can be compared against.
///
/// ```text
/// length = 5        ┌───┬───┬───┬───┬───┐
///                   │ 0 │ 1 │ 2 │ 3 │ 4 │ 5 ← first index that overflows
///                   └───┴───┴───┴───┴───┘
/// ```
pub trait LengthOps: NumericValue {
    /// The corresponding index type for this length type.
    type IndexType: IndexOps<LengthType = Self>;
}
