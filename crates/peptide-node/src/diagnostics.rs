//! Store diagnostics (`GET /test`).
//!
//! The probe never fails the request: every store error is captured in a
//! [`ProbeStatus`] and rendered as a bounded status string.

use axum::{extract::State, Json};
use peptide_store::{StoreHandle, UnconfiguredReason};
use serde::{Deserialize, Serialize};

use crate::api::AppState;

/// Maximum number of collection names reported.
pub const MAX_COLLECTIONS: usize = 10;

/// Maximum length, in characters, of an error message in the report.
pub const MAX_ERROR_CHARS: usize = 50;

/// Outcome of probing the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeStatus {
    /// No connection string was set.
    NotConfigured,
    /// The store could not be opened at startup.
    OpenFailed(String),
    /// The store answered.
    Working {
        /// Database name.
        name: String,
        /// Visible collections.
        collections: Vec<String>,
    },
    /// The store exists but listing collections failed.
    ListFailed {
        /// Database name.
        name: String,
        /// Failure message.
        error: String,
    },
}

/// Diagnostic report returned by `GET /test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// API process status.
    pub backend: String,
    /// Store status.
    pub database: String,
    /// Whether a connection string is set.
    pub database_url: String,
    /// Store name when one is available.
    pub database_name: Option<String>,
    /// `Connected` or `Not Connected`.
    pub connection_status: String,
    /// Up to [`MAX_COLLECTIONS`] collection names.
    pub collections: Vec<String>,
}

/// Probes the store behind `handle`.
pub async fn probe(handle: &StoreHandle) -> ProbeStatus {
    match handle {
        StoreHandle::Unconfigured(UnconfiguredReason::NotSet) => ProbeStatus::NotConfigured,
        StoreHandle::Unconfigured(UnconfiguredReason::OpenFailed(message)) => {
            ProbeStatus::OpenFailed(message.clone())
        }
        StoreHandle::Configured(store) => {
            let name = store.name().to_string();
            match store.list_collection_names().await {
                Ok(collections) => ProbeStatus::Working { name, collections },
                Err(e) => {
                    tracing::warn!(error = %e, "Store probe failed");
                    ProbeStatus::ListFailed {
                        name,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

impl DiagnosticReport {
    /// Renders a probe outcome.
    pub fn from_status(status: ProbeStatus, database_url_set: bool) -> Self {
        let mut report = Self {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: if database_url_set {
                "✅ Set".to_string()
            } else {
                "❌ Not Set".to_string()
            },
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        match status {
            ProbeStatus::NotConfigured => {}
            ProbeStatus::OpenFailed(message) => {
                report.database = format!("❌ Error: {}", truncate(&message, MAX_ERROR_CHARS));
            }
            ProbeStatus::Working { name, collections } => {
                report.database = "✅ Connected & Working".to_string();
                report.database_name = Some(name);
                report.connection_status = "Connected".to_string();
                report.collections = collections.into_iter().take(MAX_COLLECTIONS).collect();
            }
            ProbeStatus::ListFailed { name, error } => {
                report.database = format!(
                    "⚠️  Connected but Error: {}",
                    truncate(&error, MAX_ERROR_CHARS)
                );
                report.database_name = Some(name);
                report.connection_status = "Connected".to_string();
            }
        }

        report
    }
}

/// Probes the store and renders the report.
pub async fn probe_store(handle: &StoreHandle, database_url_set: bool) -> DiagnosticReport {
    DiagnosticReport::from_status(probe(handle).await, database_url_set)
}

fn truncate(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}

/// Diagnostic endpoint handler.
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(probe_store(&state.store, state.database_url_set).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate(&"é".repeat(80), 50).chars().count(), 50);
    }

    #[test]
    fn test_not_configured_report() {
        let report = DiagnosticReport::from_status(ProbeStatus::NotConfigured, false);
        assert_eq!(report.database, "❌ Not Available");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.database_name.is_none());
        assert!(report.collections.is_empty());
    }

    #[test]
    fn test_open_failed_report_is_bounded() {
        let report =
            DiagnosticReport::from_status(ProbeStatus::OpenFailed("x".repeat(200)), true);
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database, format!("❌ Error: {}", "x".repeat(50)));
    }

    #[test]
    fn test_working_report_caps_collections() {
        let collections = (0..15).map(|i| format!("c{i:02}")).collect();
        let report = DiagnosticReport::from_status(
            ProbeStatus::Working {
                name: "peptides".into(),
                collections,
            },
            true,
        );
        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.database_name.as_deref(), Some("peptides"));
        assert_eq!(report.collections.len(), MAX_COLLECTIONS);
        assert_eq!(report.collections[9], "c09");
    }

    #[test]
    fn test_list_failed_report() {
        let report = DiagnosticReport::from_status(
            ProbeStatus::ListFailed {
                name: "peptides".into(),
                error: "e".repeat(60),
            },
            true,
        );
        assert_eq!(
            report.database,
            format!("⚠️  Connected but Error: {}", "e".repeat(50))
        );
        assert_eq!(report.connection_status, "Connected");
        assert!(report.collections.is_empty());
    }
}
