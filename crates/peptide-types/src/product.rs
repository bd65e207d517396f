//! Catalog product types.

use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// A research peptide listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PeptideProduct {
    /// Product name.
    pub name: String,
    /// Catalog code.
    pub code: String,
    /// Short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Price in USD.
    #[validate(range(min = 0.0, message = "Price must be greater than or equal to 0"))]
    pub price: f64,
    /// Purity, e.g. `≥98% (HPLC)`.
    pub purity: String,
    /// Physical form, e.g. `Lyophilized powder`.
    pub form: String,
    /// Storage conditions, e.g. `-20°C, desiccated`.
    pub storage: String,
    /// Package size, e.g. `5 mg vial`.
    pub size: String,
    /// Inventory status.
    #[serde(default = "default_true")]
    pub in_stock: bool,
    /// Research Use Only flag.
    #[serde(default = "default_true")]
    pub research_only: bool,
}

/// A stored product together with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Store identifier rendered as a string.
    pub id: String,
    /// Product fields.
    #[serde(flatten)]
    pub product: PeptideProduct,
}

impl ProductRecord {
    /// Creates a record from an identifier and product fields.
    pub fn new(id: impl Into<String>, product: PeptideProduct) -> Self {
        Self {
            id: id.into(),
            product,
        }
    }
}
