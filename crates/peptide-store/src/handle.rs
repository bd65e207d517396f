//! Store handle: a live store or an explicit "unconfigured" marker.

use crate::{DocumentStore, MemoryStore, Result, StoreError};
use std::fmt;
use std::sync::Arc;

/// Why no store is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnconfiguredReason {
    /// No connection string was provided.
    NotSet,
    /// A connection string was provided but the store could not be opened.
    OpenFailed(String),
}

/// The store dependency handed to the API layer at construction time.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub enum StoreHandle {
    /// A live store.
    Configured(Arc<dyn DocumentStore>),
    /// No store is available.
    Unconfigured(UnconfiguredReason),
}

impl StoreHandle {
    /// Wraps a live store.
    pub fn configured(store: impl DocumentStore + 'static) -> Self {
        Self::Configured(Arc::new(store))
    }

    /// Creates a handle for a deployment without a connection string.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self::Unconfigured(UnconfiguredReason::NotSet)
    }

    /// Returns the live store, if any.
    pub fn store(&self) -> Option<&Arc<dyn DocumentStore>> {
        match self {
            Self::Configured(store) => Some(store),
            Self::Unconfigured(_) => None,
        }
    }

    /// Returns true when a live store is available.
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Connects to the store named by `url`.
    ///
    /// A missing URL or a store that fails to open yields an unconfigured
    /// handle; neither is fatal.
    pub fn connect(url: Option<&str>, name: &str) -> Self {
        let Some(url) = url else {
            tracing::warn!("No database connection string set, running without a store");
            return Self::unconfigured();
        };

        match open(url, name) {
            Ok(store) => {
                tracing::info!(database = %store.name(), "Connected to document store");
                Self::Configured(store)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to open document store, running without a store");
                Self::Unconfigured(UnconfiguredReason::OpenFailed(e.to_string()))
            }
        }
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configured(store) => f.debug_tuple("Configured").field(&store.name()).finish(),
            Self::Unconfigured(reason) => f.debug_tuple("Unconfigured").field(reason).finish(),
        }
    }
}

/// Opens a store from a connection string.
///
/// Supported forms:
/// - `memory://` or `memory://<name>`
/// - `rocksdb://<path>` (with the `rocksdb-backend` feature)
fn open(url: &str, name: &str) -> Result<Arc<dyn DocumentStore>> {
    if let Some(rest) = url.strip_prefix("memory://") {
        let rest = rest.trim_matches('/');
        let name = if rest.is_empty() { name } else { rest };
        return Ok(Arc::new(MemoryStore::new(name)));
    }

    #[cfg(feature = "rocksdb-backend")]
    {
        if let Some(path) = url.strip_prefix("rocksdb://") {
            return Ok(Arc::new(crate::RocksDbStore::open(path, name)?));
        }
    }

    // Only the scheme is reported; the rest may carry credentials.
    let scheme = url.split("://").next().unwrap_or_default();
    Err(StoreError::UnsupportedScheme(format!("{scheme}://")))
}
