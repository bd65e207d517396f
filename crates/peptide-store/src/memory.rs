//! In-memory document store.

use crate::{Document, DocumentId, DocumentStore, Result, StoredDocument};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-memory document store.
///
/// Collections keep documents in insertion order.
pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    /// Creates an empty store with the given database name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the number of documents in a collection.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .get(collection)
            .map_or(0, Vec::len)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<DocumentId> {
        let id = DocumentId::generate();
        self.collections
            .write()
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id,
                fields: document,
            });
        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<StoredDocument>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == *id).cloned()))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        Ok(self
            .collections
            .read()
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
