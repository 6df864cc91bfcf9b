// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The discriminant of an [`crate::OpResult`]: which arm it holds.
///
/// Displays as `OK` / `ERR`.
///
/// ```
/// use r3bl_types::OperationType;
///
/// assert_eq!(OperationType::Ok.to_string(), "OK");
/// assert_eq!(OperationType::Err.as_ref(), "ERR");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
pub enum OperationType {
    #[strum(to_string = "OK")]
    Ok,
    #[strum(to_string = "ERR")]
    Err,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_and_as_ref_agree() {
        for it in OperationType::iter() {
            assert_eq!(it.to_string(), it.as_ref());
        }
    }

    #[test]
    fn test_exactly_two_arms() {
        let all: Vec<OperationType> = OperationType::iter().collect();
        assert_eq!(all, vec![OperationType::Ok, OperationType::Err]);
    }
}
