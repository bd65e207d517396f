//! End-to-end tests for order intake.

use axum::{body::Body, http::Request, Router};
use peptide_node::api::{create_router, AppState};
use peptide_store::{DocumentId, DocumentStore, MemoryStore, StoreHandle};
use peptide_types::ORDER_COLLECTION;
use proptest::prelude::*;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> (Router, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new("peptides"));
    let handle = StoreHandle::Configured(store.clone() as Arc<dyn DocumentStore>);
    (create_router(AppState::new(handle, true)), store)
}

fn create_unconfigured_app() -> Router {
    create_router(AppState::new(StoreHandle::unconfigured(), false))
}

fn order_json(research_use_only_ack: bool, age_over_21_ack: bool) -> Value {
    json!({
        "items": [{"product_id": "abc", "quantity": 2}],
        "customer_name": "A",
        "email": "a@b.com",
        "country": "US",
        "research_use_only_ack": research_use_only_ack,
        "age_over_21_ack": age_over_21_ack
    })
}

fn post_order(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/orders")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_missing_age_acknowledgement_rejected() {
    let (app, store) = create_test_app();

    let response = app.oneshot(post_order(&order_json(true, false))).await.unwrap();
    assert_eq!(response.status(), 400);

    let error = json_body(response).await;
    assert_eq!(error["error"], "compliance_acknowledgement_missing");
    assert_eq!(error["message"], "Compliance acknowledgements are required");
    assert_eq!(store.count(ORDER_COLLECTION), 0);
}

#[tokio::test]
async fn test_order_persisted() {
    let (app, store) = create_test_app();

    let mut body = order_json(true, true);
    body["institution"] = json!("Lab of Things");
    body["notes"] = json!("Deliver before Friday");

    let response = app.oneshot(post_order(&body)).await.unwrap();
    assert_eq!(response.status(), 201);

    let receipt = json_body(response).await;
    assert_eq!(receipt["status"], "received");
    assert_eq!(receipt["persisted"], true);

    let id = DocumentId::parse(receipt["id"].as_str().unwrap()).unwrap();
    let stored = store.find_one(ORDER_COLLECTION, &id).await.unwrap().unwrap();
    assert_eq!(stored.fields["institution"], "Lab of Things");
    assert_eq!(stored.fields["items"][0]["quantity"], 2);
    assert_eq!(store.count(ORDER_COLLECTION), 1);
}

#[tokio::test]
async fn test_order_without_store_not_persisted() {
    let app = create_unconfigured_app();

    let response = app.oneshot(post_order(&order_json(true, true))).await.unwrap();
    assert_eq!(response.status(), 201);

    let receipt = json_body(response).await;
    assert_eq!(receipt, json!({"status": "received", "persisted": false}));
}

#[tokio::test]
async fn test_acknowledgements_checked_without_store() {
    let app = create_unconfigured_app();

    let response = app.oneshot(post_order(&order_json(false, true))).await.unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_zero_quantity_is_schema_error() {
    let (app, store) = create_test_app();

    let mut body = order_json(true, true);
    body["items"][0]["quantity"] = json!(0);

    let response = app.oneshot(post_order(&body)).await.unwrap();
    assert_eq!(response.status(), 422);

    let error = json_body(response).await;
    assert_eq!(error["details"][0]["field"], "items[0].quantity");
    assert_eq!(store.count(ORDER_COLLECTION), 0);
}

#[tokio::test]
async fn test_schema_error_wins_over_acknowledgements() {
    let (app, _store) = create_test_app();

    let mut body = order_json(false, false);
    body.as_object_mut().unwrap().remove("email");

    let response = app.oneshot(post_order(&body)).await.unwrap();
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_missing_acknowledgement_field_is_schema_error() {
    let (app, _store) = create_test_app();

    let mut body = order_json(true, true);
    body.as_object_mut().unwrap().remove("age_over_21_ack");

    let response = app.oneshot(post_order(&body)).await.unwrap();
    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn test_quantity_defaults_and_unknown_product_accepted() {
    let (app, store) = create_test_app();

    let mut body = order_json(true, true);
    body["items"] = json!([{"product_id": "does-not-exist"}]);

    let response = app.oneshot(post_order(&body)).await.unwrap();
    assert_eq!(response.status(), 201);

    let receipt = json_body(response).await;
    let id = DocumentId::parse(receipt["id"].as_str().unwrap()).unwrap();
    let stored = store.find_one(ORDER_COLLECTION, &id).await.unwrap().unwrap();
    assert_eq!(stored.fields["items"][0]["quantity"], 1);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: any missing acknowledgement yields 400 and no write,
    /// whatever the items are.
    #[test]
    fn prop_acknowledgements_gate_orders(
        ruo in any::<bool>(),
        age in any::<bool>(),
        quantities in prop::collection::vec(1i64..100, 0..5),
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let (status, count) = runtime.block_on(async {
            let (app, store) = create_test_app();
            let mut body = order_json(ruo, age);
            body["items"] = quantities
                .iter()
                .enumerate()
                .map(|(i, q)| json!({"product_id": format!("p{i}"), "quantity": q}))
                .collect();
            let response = app.oneshot(post_order(&body)).await.unwrap();
            (response.status().as_u16(), store.count(ORDER_COLLECTION))
        });

        if ruo && age {
            prop_assert_eq!(status, 201);
            prop_assert_eq!(count, 1);
        } else {
            prop_assert_eq!(status, 400);
            prop_assert_eq!(count, 0);
        }
    }
}
