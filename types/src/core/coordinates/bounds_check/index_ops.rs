// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pairs a 0-based index type w/ its length type - see [`IndexOps`].

use super::{LengthOps, NumericValue};

/// A 0-based position.
///
/// The constraint `LengthOps<IndexType = Self>` creates a bidirectional relationship
/// between an index type and its length type, so an index can only ever be compared
/// against the length it belongs to.
pub trait IndexOps: NumericValue {
    /// The corresponding length type for this index type.
    type LengthType: LengthOps<IndexType = Self>;
}
