//! Prometheus metrics collection.

use once_cell::sync::Lazy;
use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::{exponential_buckets, Histogram};
use prometheus_client::registry::Registry;
use std::sync::Arc;

/// HTTP request labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct HttpLabels {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// Request path pattern
    pub path: String,
    /// Response status code
    pub status: u16,
}

/// Order labels.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct OrderLabels {
    /// Whether the order reached the store ("true"/"false").
    pub persisted: String,
}

/// Global metrics state.
pub static METRICS: Lazy<MetricsState> = Lazy::new(MetricsState::new);

/// Metrics state container.
#[derive(Clone)]
pub struct MetricsState {
    /// Prometheus registry.
    registry: Arc<Registry>,
    /// HTTP request counter.
    pub http_requests_total: Family<HttpLabels, Counter>,
    /// HTTP request duration histogram (seconds).
    pub http_request_duration_seconds: Family<HttpLabels, Histogram>,
    /// In-flight HTTP requests.
    pub http_requests_in_flight: Gauge,
    /// Products created.
    pub products_created_total: Counter,
    /// Orders accepted, by persistence outcome.
    pub orders_received_total: Family<OrderLabels, Counter>,
    /// Orders rejected for missing compliance acknowledgements.
    pub orders_rejected_total: Counter,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsState {
    /// Create a new metrics state with all metrics registered.
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_requests_total = Family::<HttpLabels, Counter>::default();
        registry.register(
            "peptide_http_requests",
            "Total HTTP requests",
            http_requests_total.clone(),
        );

        let http_request_duration_seconds =
            Family::<HttpLabels, Histogram>::new_with_constructor(|| {
                Histogram::new(exponential_buckets(0.001, 2.0, 16))
            });
        registry.register(
            "peptide_http_request_duration_seconds",
            "HTTP request duration in seconds",
            http_request_duration_seconds.clone(),
        );

        let http_requests_in_flight = Gauge::default();
        registry.register(
            "peptide_http_requests_in_flight",
            "Number of HTTP requests being served",
            http_requests_in_flight.clone(),
        );

        let products_created_total = Counter::default();
        registry.register(
            "peptide_products_created",
            "Total products created",
            products_created_total.clone(),
        );

        let orders_received_total = Family::<OrderLabels, Counter>::default();
        registry.register(
            "peptide_orders_received",
            "Total orders accepted",
            orders_received_total.clone(),
        );

        let orders_rejected_total = Counter::default();
        registry.register(
            "peptide_orders_rejected",
            "Total orders rejected for missing acknowledgements",
            orders_rejected_total.clone(),
        );

        Self {
            registry: Arc::new(registry),
            http_requests_total,
            http_request_duration_seconds,
            http_requests_in_flight,
            products_created_total,
            orders_received_total,
            orders_rejected_total,
        }
    }

    /// Record an HTTP request.
    pub fn record_http_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let labels = HttpLabels {
            method: method.to_string(),
            path: normalize_path(path),
            status,
        };

        self.http_requests_total.get_or_create(&labels).inc();
        self.http_request_duration_seconds
            .get_or_create(&labels)
            .observe(duration_secs);
    }

    /// Record an accepted order.
    pub fn record_order(&self, persisted: bool) {
        self.orders_received_total
            .get_or_create(&OrderLabels {
                persisted: persisted.to_string(),
            })
            .inc();
    }

    /// Encode metrics for Prometheus scraping.
    pub fn encode(&self) -> Result<String, std::fmt::Error> {
        let mut buffer = String::new();
        prometheus_client::encoding::text::encode(&mut buffer, &self.registry)?;
        Ok(buffer)
    }
}

/// Normalize path for metrics by collapsing document ids.
fn normalize_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            if segment.len() == 24 && segment.chars().all(|c| c.is_ascii_hexdigit()) {
                ":id"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/api/products"), "/api/products");
        assert_eq!(
            normalize_path("/api/products/65a1f0c2e4b0a1b2c3d4e5f6"),
            "/api/products/:id"
        );
        assert_eq!(normalize_path("/api/products/abc"), "/api/products/abc");
    }

    #[test]
    fn test_metrics_state_creation() {
        let metrics = MetricsState::new();
        metrics.record_http_request("GET", "/api/products", 200, 0.001);
        metrics.record_order(false);
        let encoded = metrics.encode().unwrap();
        assert!(encoded.contains("peptide_http_requests"));
        assert!(encoded.contains("peptide_orders_received"));
    }
}
