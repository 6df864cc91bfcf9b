// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Index, Length, RangeValidityStatus};

/// Reasons a [`crate::Slice`] operation can be refused. The `try_*` accessors return
/// these, and the panicking accessors panic w/ their [`std::fmt::Display`] text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum SliceError {
    /// `index` is the value exactly as the caller passed it, so a negative index shows
    /// up as negative.
    #[error(
        "index {index} is out of range for a slice of length {}",
        .length.as_usize()
    )]
    #[diagnostic(
        code(r3bl_types::slice::index_out_of_range),
        help("Valid indices are `0..length`, and negative indices are never valid")
    )]
    IndexOutOfRange { index: i128, length: Length },

    #[error(
        "range {start:?}..{end:?} is not valid for storage of length {}: {status:?}",
        .storage_length.as_usize()
    )]
    #[diagnostic(
        code(r3bl_types::slice::invalid_range),
        help("The range must not be inverted, and must end at or before the length")
    )]
    InvalidRange {
        status: RangeValidityStatus,
        start: Index,
        end: Index,
        storage_length: Length,
    },

    /// `actual` is counted no further than one past `expected`, so a source that is
    /// too long (or endless) reports `expected + 1`.
    #[error(
        "source yields {} items but the slice holds {}",
        .actual.as_usize(),
        .expected.as_usize()
    )]
    #[diagnostic(
        code(r3bl_types::slice::length_mismatch),
        help("The source iterator must yield exactly `len()` items")
    )]
    LengthMismatch { expected: Length, actual: Length },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, idx, len};

    #[test]
    fn test_index_out_of_range_shows_negative_index() {
        let it = SliceError::IndexOutOfRange {
            index: -10,
            length: len(5),
        };
        assert_eq2!(
            it.to_string(),
            "index -10 is out of range for a slice of length 5"
        );
    }

    #[test]
    fn test_invalid_range_display() {
        let it = SliceError::InvalidRange {
            status: RangeValidityStatus::EndOutOfBounds,
            start: idx(2),
            end: idx(9),
            storage_length: len(5),
        };
        assert_eq2!(
            it.to_string(),
            "range Index(2)..Index(9) is not valid for storage of length 5: EndOutOfBounds"
        );
    }

    #[test]
    fn test_length_mismatch_display() {
        let it = SliceError::LengthMismatch {
            expected: len(3),
            actual: len(2),
        };
        assert_eq2!(it.to_string(), "source yields 2 items but the slice holds 3");
    }

    #[test]
    fn test_converts_into_miette_report() {
        let report: miette::Report = SliceError::LengthMismatch {
            expected: len(1),
            actual: len(0),
        }
        .into();
        assert_eq2!(report.to_string(), "source yields 0 items but the slice holds 1");
    }
}
