//! Error type shared by every fallible collection operation.

use thiserror::Error;

/// Result type local to ironcollect.
pub type Result<T> = std::result::Result<T, CollectionError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An aggregate, removal or random pick was requested on an empty container.
    #[error("`{op}` called on an empty collection")]
    EmptyContainer { op: &'static str },

    /// A search with no default found nothing.
    #[error("not found: {what}")]
    NotFound { what: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl CollectionError {
    pub(crate) fn empty(op: &'static str) -> Self {
        Self::EmptyContainer { op }
    }

    pub(crate) fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(%reason, "rejecting collection argument");
        Self::InvalidArgument { reason }
    }
}
