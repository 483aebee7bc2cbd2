// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for rxchain.
//!
//! [`RxError`] is the single error type carried by `on_error` and returned by
//! fallible constructors. It is cheap to clone, because a hot source delivers
//! the same error value to every subscribed observer.
//!
//! # Examples
//!
//! ```
//! use rxchain_core::{RxError, Result};
//!
//! fn produce() -> Result<()> {
//!     Err(RxError::stream_error("source not ready"))
//! }
//!
//! assert!(produce().is_err());
//! ```

use std::error::Error;
use std::sync::Arc;

/// Root error type for all rxchain operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RxError {
    /// A required handler was absent when building a callback-backed
    /// observer or observable.
    ///
    /// Raised at construction time, never at first invocation.
    #[error("Missing required handler: {handler}")]
    MissingHandler {
        /// Name of the absent handler (`on_next`, `on_error`, `on_completed`, `subscribe`)
        handler: &'static str,
    },

    /// A source signalled a failure while producing values.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Error produced by user code, such as a fallible predicate or transform.
    #[error("User error: {0}")]
    UserError(#[source] Arc<dyn Error + Send + Sync>),
}

impl RxError {
    /// Create a missing-handler validation error.
    #[must_use]
    pub const fn missing_handler(handler: &'static str) -> Self {
        Self::MissingHandler { handler }
    }

    /// Create a stream processing error with the given context.
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error.
    pub fn user_error(error: impl Error + Send + Sync + 'static) -> Self {
        Self::UserError(Arc::new(error))
    }

    /// Returns `true` for construction-time validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingHandler { .. })
    }

    /// Returns `true` if the error originated in user-supplied code.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(self, Self::UserError(_))
    }
}

/// Two errors are equal when they are the same variant with the same payload.
/// User errors compare by identity of the shared inner error.
impl PartialEq for RxError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingHandler { handler: a }, Self::MissingHandler { handler: b }) => a == b,
            (
                Self::StreamProcessingError { context: a },
                Self::StreamProcessingError { context: b },
            ) => a == b,
            (Self::UserError(a), Self::UserError(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Specialized Result type for rxchain operations.
pub type Result<T> = std::result::Result<T, RxError>;

/// Extension trait for converting any standard error into an [`RxError`].
pub trait IntoRxError {
    /// Convert this error into an `RxError::UserError`.
    fn into_rx_error(self) -> RxError;
}

impl<E: Error + Send + Sync + 'static> IntoRxError for E {
    fn into_rx_error(self) -> RxError {
        RxError::user_error(self)
    }
}

/// Errors returned by the imperative side of a [`Subject`](crate::Subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubjectError {
    /// The subject has already delivered a terminal signal.
    #[error("Subject is closed")]
    Closed,
}
