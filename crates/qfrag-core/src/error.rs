//! Error type returned when a fragment cannot be rendered.

use thiserror::Error;

/// Failure produced by [`Source::source`](crate::Source::source).
///
/// Builders never wrap the errors of their children: a failing inner hit or
/// sorter surfaces to the caller as exactly the value it returned.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A raw JSON body could not be parsed.
    #[error("invalid JSON fragment: {0}")]
    Json(#[from] serde_json::Error),

    /// A textual fragment definition could not be understood.
    #[error("invalid spec {spec:?}: {reason}")]
    InvalidSpec {
        /// The offending input, verbatim.
        spec: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Failure reported by a `Source` implementation outside this crate.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Wrap an arbitrary error from a third-party `Source` implementation.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Other(err.into())
    }

    /// Reject a textual fragment definition.
    pub fn invalid_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout qfrag-core.
pub type Result<T> = std::result::Result<T, SourceError>;
