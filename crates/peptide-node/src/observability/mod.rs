//! # Observability Module
//!
//! Logging and request tracking for the catalog node:
//!
//! - **Structured Logging**: pretty or JSON logs with request IDs in scope
//! - **Prometheus Metrics**: HTTP traffic plus product and order counters
//! - **Request Tracing**: `x-request-id` propagation on every response
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axum::{middleware, Router};
//! use peptide_node::observability::{init_logging, request_id_middleware, LogFormat};
//!
//! init_logging("info", LogFormat::Json);
//!
//! let app: Router<()> = Router::new()
//!     .layer(middleware::from_fn(request_id_middleware));
//! ```

mod logging;
mod metrics;
pub mod middleware;

pub use logging::{init_logging, LogFormat};
pub use metrics::{MetricsState, METRICS};
pub use middleware::{metrics_handler, metrics_middleware, request_id_middleware, REQUEST_ID_HEADER};
