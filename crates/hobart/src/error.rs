//! Error types for provider operations.

use thiserror::Error;

/// Result type for provider operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Coarse failure classification surfaced to callers.
///
/// Collapses [`DataError`] variants into the three kinds callers branch on:
/// provider unreachable, provider reachable but payload malformed, and
/// everything else. "No data found" is never an error of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The provider could not be reached or refused the request.
    Request,
    /// The provider answered but the payload was structurally invalid.
    Parse,
    /// A failure outside the request/parse taxonomy.
    Unexpected,
}

/// Errors that can occur while querying the provider.
#[derive(Debug, Error)]
pub enum DataError {
    /// Network-level failure (DNS, connect, timeout) before a response arrived.
    #[error("request for {context} failed")]
    Request {
        /// What was being queried (symbol or date).
        context: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {status} for {context}")]
    Status {
        /// What was being queried (symbol or date).
        context: String,
        /// The non-2xx status code.
        status: reqwest::StatusCode,
    },

    /// Response received but not interpretable as the expected structure.
    #[error("malformed response for {context}: {reason}")]
    Parse {
        /// What was being queried (symbol or date).
        context: String,
        /// Why the payload could not be interpreted.
        reason: String,
    },

    /// Anything not anticipated by the request/parse taxonomy.
    #[error("unexpected failure for {context}: {reason}")]
    Unexpected {
        /// What was being queried (symbol or date).
        context: String,
        /// Description of the failure.
        reason: String,
    },
}

impl DataError {
    /// The coarse classification of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Request { .. } | Self::Status { .. } => ErrorKind::Request,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }

    /// Build a [`DataError::Request`], logging the transport failure first.
    pub(crate) fn request(context: impl Into<String>, source: reqwest::Error) -> Self {
        let context = context.into();
        tracing::warn!(%context, error = %source, "transport failure");
        Self::Request { context, source }
    }

    /// Build a [`DataError::Status`], logging the refusal first.
    pub(crate) fn status(context: impl Into<String>, status: reqwest::StatusCode) -> Self {
        let context = context.into();
        tracing::warn!(%context, %status, "provider refused request");
        Self::Status { context, status }
    }

    /// Build a [`DataError::Parse`], logging the structural failure first.
    pub(crate) fn parse(context: impl Into<String>, reason: impl Into<String>) -> Self {
        let context = context.into();
        let reason = reason.into();
        tracing::warn!(%context, %reason, "structurally invalid response");
        Self::Parse { context, reason }
    }

    /// Build a [`DataError::Unexpected`], logging it with full context first.
    ///
    /// Unexpected failures must never be silently swallowed: the event hits
    /// the log at error level even if the caller discards the returned
    /// error.
    pub fn unexpected(context: impl Into<String>, reason: impl Into<String>) -> Self {
        let context = context.into();
        let reason = reason.into();
        tracing::error!(%context, %reason, "unexpected failure");
        Self::Unexpected { context, reason }
    }
}
