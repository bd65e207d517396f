//! Document storage for the peptide catalog.
//!
//! This crate provides the persistence collaborator the API delegates to:
//! named collections of JSON documents, each with a store-assigned
//! [`DocumentId`]. Backends implement [`DocumentStore`]; the API only ever
//! sees a [`StoreHandle`], which is either a live store or an explicit
//! "unconfigured" marker.

mod error;
mod handle;
mod id;
mod memory;
#[cfg(feature = "rocksdb-backend")]
mod rocksdb_store;
mod traits;

pub use error::StoreError;
pub use handle::{StoreHandle, UnconfiguredReason};
pub use id::DocumentId;
pub use memory::MemoryStore;
#[cfg(feature = "rocksdb-backend")]
pub use rocksdb_store::{RocksDbStatsSnapshot, RocksDbStore};
pub use traits::{to_document, Document, DocumentStore, StoredDocument};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
