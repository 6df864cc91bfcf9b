// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;

/// Returned by [`crate::OpResult::try_unwrap`] and [`crate::OpResult::try_unwrap_error`]
/// when the requested arm is not the one held. The panicking accessors
/// ([`crate::OpResult::unwrap`] and [`crate::OpResult::unwrap_error`]) report the same
/// condition by panicking instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum OpResultAccessError {
    #[error(
        "called `OpResult::unwrap()` on an `Err` value: {}",
        .message.as_deref().unwrap_or("<no message>")
    )]
    #[diagnostic(
        code(r3bl_types::op_result::unwrap_on_err),
        help("Check `is_success()` first, or branch on the `OpResult` with `match`")
    )]
    UnwrapOnErr { message: Option<InlineString> },

    #[error("called `OpResult::unwrap_error()` on an `Ok` value")]
    #[diagnostic(
        code(r3bl_types::op_result::unwrap_error_on_ok),
        help("Check `is_err()` first, or branch on the `OpResult` with `match`")
    )]
    UnwrapErrorOnOk,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_unwrap_on_err_display_includes_message() {
        let it = OpResultAccessError::UnwrapOnErr {
            message: Some("disk full".into()),
        };
        assert_eq2!(
            it.to_string(),
            "called `OpResult::unwrap()` on an `Err` value: disk full"
        );
    }

    #[test]
    fn test_unwrap_on_err_display_without_message() {
        let it = OpResultAccessError::UnwrapOnErr { message: None };
        assert_eq2!(
            it.to_string(),
            "called `OpResult::unwrap()` on an `Err` value: <no message>"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic;

        let code = OpResultAccessError::UnwrapErrorOnOk
            .code()
            .map(|it| it.to_string());
        assert_eq2!(
            code.as_deref(),
            Some("r3bl_types::op_result::unwrap_error_on_ok")
        );
    }
}
