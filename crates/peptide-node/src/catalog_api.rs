//! # Catalog API
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/products` | List every product (empty when no store is configured) |
//! | GET | `/api/products/{id}` | Get one product |
//! | POST | `/api/products` | Create a product |
//!
//! ## Example: Creating a Product
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/products \
//!   -H "Content-Type: application/json" \
//!   -d '{
//!     "name": "BPC-157",
//!     "code": "PEP-001",
//!     "price": 49.5,
//!     "purity": "≥98% (HPLC)",
//!     "form": "Lyophilized powder",
//!     "storage": "-20°C, desiccated",
//!     "size": "5 mg vial"
//!   }'
//! ```

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use peptide_store::{to_document, DocumentId, StoredDocument};
use peptide_types::{PeptideProduct, ProductRecord, PRODUCT_COLLECTION};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::ApiError;
use crate::observability::METRICS;
use crate::validation::ValidatedJson;

/// Response to a successful create.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// Identifier of the new record.
    pub id: String,
}

/// Creates the catalog routes.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products).post(create_product))
        .route("/api/products/{product_id}", get(get_product))
}

/// Maps a stored document into the typed product record.
pub fn product_from_document(doc: StoredDocument) -> Result<ProductRecord, serde_json::Error> {
    let product: PeptideProduct = serde_json::from_value(serde_json::Value::Object(doc.fields))?;
    Ok(ProductRecord::new(doc.id.to_string(), product))
}

/// Lists all products.
async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    let Some(store) = state.store.store() else {
        tracing::debug!("No store configured, returning empty catalog");
        return Ok(Json(Vec::new()));
    };

    let products: Vec<ProductRecord> = store
        .find_all(PRODUCT_COLLECTION)
        .await?
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id;
            match product_from_document(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping malformed product document");
                    None
                }
            }
        })
        .collect();

    tracing::debug!(count = products.len(), "Listed products");
    Ok(Json(products))
}

/// Gets one product by identifier.
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
    let Some(store) = state.store.store() else {
        tracing::debug!(product_id = %product_id, "No store configured, product not found");
        return Err(ApiError::NotFound("Product"));
    };

    let id = DocumentId::parse(&product_id)
        .map_err(|_| ApiError::InvalidIdentifier(product_id.clone()))?;

    let doc = store
        .find_one(PRODUCT_COLLECTION, &id)
        .await?
        .ok_or(ApiError::NotFound("Product"))?;

    let record = product_from_document(doc)
        .map_err(|e| ApiError::Internal(format!("malformed product {id}: {e}")))?;

    tracing::debug!(id = %id, code = %record.product.code, "Product fetched");
    Ok(Json(record))
}

/// Creates a product.
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(product): ValidatedJson<PeptideProduct>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.store().ok_or(ApiError::StoreUnavailable)?;

    let id = store
        .insert_one(PRODUCT_COLLECTION, to_document(&product)?)
        .await?;

    METRICS.products_created_total.inc();
    tracing::info!(id = %id, code = %product.code, "Product created");

    Ok((StatusCode::CREATED, Json(CreatedResponse { id: id.to_string() })))
}
