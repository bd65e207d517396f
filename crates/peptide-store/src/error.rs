//! Store error types.

use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier is not a well-formed document id.
    #[error("invalid document id '{0}': expected 24 hex characters")]
    InvalidId(String),

    /// A value could not be converted to or from JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A value serialized to something other than a JSON object.
    #[error("document must be a JSON object")]
    NotAnObject,

    /// The underlying backend failed.
    #[error("backend error: {0}")]
    Backend(String),

    /// The connection string names a backend this build does not provide.
    #[error("unsupported connection string: {0}")]
    UnsupportedScheme(String),
}
