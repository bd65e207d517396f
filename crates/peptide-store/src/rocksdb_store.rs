//! RocksDB persistent document store.
//!
//! All collections share one database. Keys are `<collection>\0<id-hex>` and
//! values are the JSON-encoded document, so a collection is a key prefix and
//! documents within it are ordered by identifier.
//!
//! Reads and writes call RocksDB directly from the async methods. Each call is
//! a single point lookup, put or prefix scan.

use crate::{Document, DocumentId, DocumentStore, Result, StoreError, StoredDocument};
use async_trait::async_trait;
use rocksdb::{Direction, IteratorMode, Options, DB};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

const SEPARATOR: u8 = 0;

/// RocksDB-backed document store.
pub struct RocksDbStore {
    db: DB,
    name: String,
    stats: RocksDbStats,
}

/// RocksDB statistics.
#[derive(Debug, Default)]
struct RocksDbStats {
    reads: AtomicU64,
    writes: AtomicU64,
}

/// Snapshot of RocksDB statistics.
#[derive(Debug, Clone)]
pub struct RocksDbStatsSnapshot {
    pub reads: u64,
    pub writes: u64,
}

fn backend_err(e: rocksdb::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

impl RocksDbStore {
    /// Opens or creates a database at `path`.
    pub fn open<P: AsRef<Path>>(path: P, name: impl Into<String>) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Lz4);

        let db = DB::open(&opts, path).map_err(backend_err)?;

        Ok(Self {
            db,
            name: name.into(),
            stats: RocksDbStats::default(),
        })
    }

    fn collection_prefix(collection: &str) -> Vec<u8> {
        let mut prefix = Vec::with_capacity(collection.len() + 1);
        prefix.extend_from_slice(collection.as_bytes());
        prefix.push(SEPARATOR);
        prefix
    }

    fn key(collection: &str, id: &DocumentId) -> Vec<u8> {
        let mut key = Self::collection_prefix(collection);
        key.extend_from_slice(id.to_hex().as_bytes());
        key
    }

    fn decode(key_suffix: &[u8], value: &[u8]) -> Result<StoredDocument> {
        let hex = std::str::from_utf8(key_suffix)
            .map_err(|_| StoreError::Backend("corrupt document key".to_string()))?;
        let id = DocumentId::parse(hex)?;
        let fields: Document = serde_json::from_slice(value)?;
        Ok(StoredDocument { id, fields })
    }

    /// Returns storage statistics.
    pub fn stats(&self) -> RocksDbStatsSnapshot {
        RocksDbStatsSnapshot {
            reads: self.stats.reads.load(Ordering::Relaxed),
            writes: self.stats.writes.load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl DocumentStore for RocksDbStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<DocumentId> {
        let id = DocumentId::generate();
        let data = serde_json::to_vec(&document)?;

        self.db
            .put(Self::key(collection, &id), data)
            .map_err(backend_err)?;

        self.stats.writes.fetch_add(1, Ordering::Relaxed);
        Ok(id)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);

        let prefix = Self::collection_prefix(collection);
        let mut docs = Vec::new();

        for item in self
            .db
            .iterator(IteratorMode::From(prefix.as_slice(), Direction::Forward))
        {
            let (key, value) = item.map_err(backend_err)?;
            if !key.starts_with(&prefix) {
                break;
            }
            docs.push(Self::decode(&key[prefix.len()..], &value)?);
        }

        Ok(docs)
    }

    async fn find_one(&self, collection: &str, id: &DocumentId) -> Result<Option<StoredDocument>> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);

        match self.db.get(Self::key(collection, id)).map_err(backend_err)? {
            Some(data) => Ok(Some(StoredDocument {
                id: *id,
                fields: serde_json::from_slice(&data)?,
            })),
            None => Ok(None),
        }
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let mut names = BTreeSet::new();

        for item in self.db.iterator(IteratorMode::Start) {
            let (key, _) = item.map_err(backend_err)?;
            if let Some(pos) = key.iter().position(|b| *b == SEPARATOR) {
                names.insert(String::from_utf8_lossy(&key[..pos]).into_owned());
            }
        }

        Ok(names.into_iter().collect())
    }
}
