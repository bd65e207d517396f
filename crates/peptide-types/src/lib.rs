//! Common types used throughout the peptide catalog.
//!
//! This crate holds the request schemas accepted by the API and the
//! shapes it returns. Schema rules (field presence, ranges, defaults) live
//! on the types themselves through `serde` and `validator` so every layer
//! that deserializes a payload enforces the same contract.

mod info;
mod order;
mod product;

pub use info::{Disclaimer, Message};
pub use order::{Order, OrderItem};
pub use product::{PeptideProduct, ProductRecord};

/// Collection holding catalog products.
pub const PRODUCT_COLLECTION: &str = "peptideproduct";

/// Collection holding customer orders.
pub const ORDER_COLLECTION: &str = "order";
