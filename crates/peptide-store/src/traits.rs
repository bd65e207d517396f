//! Document store traits.
//!
//! Defines the interface every backend implements so the API layer can stay
//! agnostic of where documents live.

use crate::{DocumentId, Result, StoreError};
use async_trait::async_trait;
use serde::Serialize;

/// A JSON object as held by the store.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// A document read back from the store with its identifier.
///
/// The identifier is never part of `fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    /// Store-assigned identifier.
    pub id: DocumentId,
    /// Document contents.
    pub fields: Document,
}

/// Converts a serializable value into a [`Document`].
///
/// # Errors
///
/// Returns an error if serialization fails or the value is not a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject),
    }
}

/// Trait for document store backends.
///
/// Implementations include the in-memory store and RocksDB.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the database name.
    fn name(&self) -> &str;

    /// Inserts a document and returns its new identifier.
    async fn insert_one(&self, collection: &str, document: Document) -> Result<DocumentId>;

    /// Returns every document in a collection.
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>>;

    /// Looks up one document by identifier.
    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<StoredDocument>>;

    /// Lists the names of all non-empty collections, sorted.
    async fn list_collection_names(&self) -> Result<Vec<String>>;
}
