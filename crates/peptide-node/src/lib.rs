//! # Peptide Node
//!
//! HTTP backend for a research-chemical catalog: it lists products,
//! retrieves a product by identifier, accepts new listings, and accepts
//! customer orders carrying mandatory compliance acknowledgements.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 HTTP API Layer               │
//! │  • Catalog (list, get, create products)      │
//! │  • Orders (compliance-checked intake)        │
//! │  • Diagnostics and informational endpoints   │
//! └──────────────────────────────────────────────┘
//!                        │  StoreHandle
//! ┌──────────────────────────────────────────────┐
//! │              Document Store                  │
//! │  • in-memory or RocksDB, or "unconfigured"   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Handlers never reach for a global store. The [`api::AppState`] handed to
//! [`api::create_router`] carries a [`peptide_store::StoreHandle`] and every
//! handler branches on it: reads degrade to empty or not-found results,
//! product creation fails, and orders are accepted but not persisted.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=memory:// cargo run --bin peptide-node -- --port 8000
//! ```
//!
//! ## Example: Building the Router
//!
//! ```rust,no_run
//! use peptide_node::api::{create_router, AppState};
//! use peptide_store::{MemoryStore, StoreHandle};
//!
//! let state = AppState::new(StoreHandle::configured(MemoryStore::new("peptides")), true);
//! let app = create_router(state);
//! ```

pub mod api;
pub mod catalog_api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod observability;
pub mod order_api;
pub mod validation;
