//! HTTP API for the catalog node.
//!
//! Builds the router, owns the shared [`AppState`] and serves the static
//! informational endpoints. Product and order endpoints live in
//! [`crate::catalog_api`] and [`crate::order_api`].

use axum::{middleware, routing::get, Json, Router};
use peptide_store::StoreHandle;
use peptide_types::{Disclaimer, Message};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::catalog_api::catalog_routes;
use crate::diagnostics::test_database;
use crate::observability::{metrics_handler, metrics_middleware, request_id_middleware};
use crate::order_api::order_routes;

/// Application state shared across handlers.
///
/// Holds no mutable data; it is built once at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Document store, or the marker saying there is none.
    pub store: StoreHandle,
    /// Whether a connection string was provided.
    pub database_url_set: bool,
}

impl AppState {
    /// Creates application state.
    pub fn new(store: StoreHandle, database_url_set: bool) -> Self {
        Self {
            store,
            database_url_set,
        }
    }
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(read_root))
        .route("/api/hello", get(hello))
        .route("/api/disclaimer", get(disclaimer))
        .route("/test", get(test_database))
        .route("/metrics", get(metrics_handler))
        .merge(catalog_routes())
        .merge(order_routes())
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root health message.
async fn read_root() -> Json<Message> {
    Json(Message::new("Peptide Research API running"))
}

/// Greeting.
async fn hello() -> Json<Message> {
    Json(Message::new("Hello from the backend API!"))
}

/// Research-use-only disclaimer.
async fn disclaimer() -> Json<Disclaimer> {
    Json(Disclaimer::research_use_only())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_endpoint() {
        let app = create_router(AppState::new(StoreHandle::unconfigured(), false));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }
}
