// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{InlineString, OpResultAccessError, OperationType};

/// The outcome of an operation that can fail. See the [module docs](crate::op_result)
/// for an overview.
///
/// The optional `message` lives only on the `Err` arm. An `Ok` never has one.
#[must_use = "this `OpResult` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpResult<T, E> {
    Ok(T),
    Err {
        error: E,
        message: Option<InlineString>,
    },
}

/// An [`OpResult`] that carries no value on success.
pub type UnitOpResult<E> = OpResult<(), E>;

mod construct {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T, E> OpResult<T, E> {
        /// Wrap a success `value`.
        pub fn success(value: T) -> Self { Self::Ok(value) }

        /// Wrap an `error` w/out any diagnostic message.
        pub fn failure(error: E) -> Self {
            Self::Err {
                error,
                message: None,
            }
        }

        /// Wrap an `error` along w/ a diagnostic `message`. An empty string is stored as
        /// is, and is still "present".
        pub fn failure_with_message(error: E, message: impl AsRef<str>) -> Self {
            Self::Err {
                error,
                message: Some(InlineString::from(message.as_ref())),
            }
        }
    }
}

mod query {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T, E> OpResult<T, E> {
        #[must_use]
        pub fn operation_type(&self) -> OperationType {
            match self {
                Self::Ok(_) => OperationType::Ok,
                Self::Err { .. } => OperationType::Err,
            }
        }

        #[must_use]
        pub fn is_success(&self) -> bool { matches!(self, Self::Ok(_)) }

        /// Same as [`Self::is_success`].
        #[must_use]
        pub fn is_ok(&self) -> bool { self.is_success() }

        #[must_use]
        pub fn is_err(&self) -> bool { !self.is_success() }

        /// The success value, if this is `Ok`.
        #[must_use]
        pub fn value(&self) -> Option<&T> {
            match self {
                Self::Ok(value) => Some(value),
                Self::Err { .. } => None,
            }
        }

        /// The error payload, if this is `Err`.
        #[must_use]
        pub fn error(&self) -> Option<&E> {
            match self {
                Self::Ok(_) => None,
                Self::Err { error, .. } => Some(error),
            }
        }

        /// The diagnostic message. Always `None` for `Ok`, and for an `Err` built w/out
        /// one.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            match self {
                Self::Ok(_) => None,
                Self::Err { message, .. } => message.as_deref(),
            }
        }

        /// Consume `self` and keep only the success value.
        #[must_use]
        pub fn into_value(self) -> Option<T> {
            match self {
                Self::Ok(value) => Some(value),
                Self::Err { .. } => None,
            }
        }

        /// Consume `self` and keep only the error payload. The message is dropped.
        #[must_use]
        pub fn into_error(self) -> Option<E> {
            match self {
                Self::Ok(_) => None,
                Self::Err { error, .. } => Some(error),
            }
        }
    }
}

mod unwrap {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T, E> OpResult<T, E> {
        /// Returns the success value, or [`OpResultAccessError::UnwrapOnErr`] (which
        /// carries over the diagnostic message) if this is `Err`.
        ///
        /// # Errors
        ///
        /// If this is `Err`.
        pub fn try_unwrap(self) -> Result<T, OpResultAccessError> {
            match self {
                Self::Ok(value) => Ok(value),
                Self::Err { message, .. } => {
                    Err(OpResultAccessError::UnwrapOnErr { message })
                }
            }
        }

        /// Returns the error payload, or [`OpResultAccessError::UnwrapErrorOnOk`] if this
        /// is `Ok`.
        ///
        /// # Errors
        ///
        /// If this is `Ok`.
        pub fn try_unwrap_error(self) -> Result<E, OpResultAccessError> {
            match self {
                Self::Ok(_) => Err(OpResultAccessError::UnwrapErrorOnOk),
                Self::Err { error, .. } => Ok(error),
            }
        }

        /// Returns the success value, or `default` if this is `Err`.
        pub fn unwrap_or(self, default: T) -> T {
            match self {
                Self::Ok(value) => value,
                Self::Err { .. } => default,
            }
        }

        /// Returns the success value, or computes one from the error and message.
        pub fn unwrap_or_else(self, fallback: impl FnOnce(E, Option<&str>) -> T) -> T {
            match self {
                Self::Ok(value) => value,
                Self::Err { error, message } => fallback(error, message.as_deref()),
            }
        }
    }

    impl<T, E: Debug> OpResult<T, E> {
        /// Returns the success value.
        ///
        /// # Panics
        ///
        /// If this is `Err`. This is a precondition violation, not a recoverable
        /// condition. A [`tracing::error!`] event is emitted before the panic.
        #[track_caller]
        pub fn unwrap(self) -> T {
            match self {
                Self::Ok(value) => value,
                Self::Err { error, message } => {
                    let location = std::panic::Location::caller();
                    // % is Display, ? is Debug.
                    tracing::error!(
                        message = "OpResult::unwrap() called on an Err value",
                        error = ?error,
                        details = ?message,
                        location = %location,
                    );
                    panic!(
                        "{}: {error:?}",
                        OpResultAccessError::UnwrapOnErr { message }
                    );
                }
            }
        }
    }

    impl<T: Debug, E> OpResult<T, E> {
        /// Returns the error payload.
        ///
        /// # Panics
        ///
        /// If this is `Ok`. A [`tracing::error!`] event is emitted before the panic.
        #[track_caller]
        pub fn unwrap_error(self) -> E {
            match self {
                Self::Ok(value) => {
                    let location = std::panic::Location::caller();
                    // % is Display, ? is Debug.
                    tracing::error!(
                        message = "OpResult::unwrap_error() called on an Ok value",
                        value = ?value,
                        location = %location,
                    );
                    panic!("{}: {value:?}", OpResultAccessError::UnwrapErrorOnOk);
                }
                Self::Err { error, .. } => error,
            }
        }
    }
}

mod combinators {
    #![allow(clippy::wildcard_imports)]
    use super::*;

    impl<T, E> OpResult<T, E> {
        /// Transform the success value. An `Err` passes through untouched.
        pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OpResult<U, E> {
            match self {
                Self::Ok(value) => OpResult::Ok(f(value)),
                Self::Err { error, message } => OpResult::Err { error, message },
            }
        }

        /// Transform the error payload. The message is kept as is.
        pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> OpResult<T, F> {
            match self {
                Self::Ok(value) => OpResult::Ok(value),
                Self::Err { error, message } => OpResult::Err {
                    error: f(error),
                    message,
                },
            }
        }

        /// Chain another fallible operation onto a success.
        pub fn and_then<U>(self, f: impl FnOnce(T) -> OpResult<U, E>) -> OpResult<U, E> {
            match self {
                Self::Ok(value) => f(value),
                Self::Err { error, message } => OpResult::Err { error, message },
            }
        }
    }
}
