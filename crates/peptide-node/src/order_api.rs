//! # Order API
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/orders` | Place an order |
//!
//! Orders are accepted only when both compliance acknowledgements
//! (`research_use_only_ack`, `age_over_21_ack`) are true. The check runs
//! after schema validation and before any write.
//!
//! When no store is configured the order is still accepted, but the receipt
//! reports `persisted: false` and carries no `id`.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use peptide_store::to_document;
use peptide_types::{Order, ORDER_COLLECTION};
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::ApiError;
use crate::observability::METRICS;
use crate::validation::ValidatedJson;

/// Receipt returned for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// Always `received`.
    pub status: String,
    /// Whether the order was written to the store.
    pub persisted: bool,
    /// Store identifier, present only when persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OrderReceipt {
    fn received(id: Option<String>) -> Self {
        Self {
            status: "received".to_string(),
            persisted: id.is_some(),
            id,
        }
    }
}

/// Creates the order routes.
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/api/orders", post(create_order))
}

/// Places an order.
async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(order): ValidatedJson<Order>,
) -> Result<impl IntoResponse, ApiError> {
    if !order.acknowledgements_complete() {
        METRICS.orders_rejected_total.inc();
        tracing::warn!(
            research_use_only_ack = order.research_use_only_ack,
            age_over_21_ack = order.age_over_21_ack,
            "Order rejected: compliance acknowledgements missing"
        );
        return Err(ApiError::ComplianceAcknowledgementMissing);
    }

    let Some(store) = state.store.store() else {
        METRICS.record_order(false);
        tracing::warn!(
            items = order.items.len(),
            "Order received without a store, not persisted"
        );
        return Ok((StatusCode::CREATED, Json(OrderReceipt::received(None))));
    };

    let id = store.insert_one(ORDER_COLLECTION, to_document(&order)?).await?;

    METRICS.record_order(true);
    tracing::info!(id = %id, items = order.items.len(), "Order received");

    Ok((
        StatusCode::CREATED,
        Json(OrderReceipt::received(Some(id.to_string()))),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_without_id_omits_field() {
        let value = serde_json::to_value(OrderReceipt::received(None)).unwrap();
        assert_eq!(value["status"], "received");
        assert_eq!(value["persisted"], false);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_receipt_with_id_is_persisted() {
        let receipt = OrderReceipt::received(Some("65a1f0c2e4b0a1b2c3d4e5f6".into()));
        assert!(receipt.persisted);
    }
}
