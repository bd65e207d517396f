//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use peptide_store::StoreError;
use serde::Serialize;

use crate::validation::ValidationErrorResponse;

/// Errors returned by API handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body failed schema validation.
    #[error("validation failed")]
    Validation(ValidationErrorResponse),
    /// The identifier is not well-formed for the store.
    #[error("Invalid product id")]
    InvalidIdentifier(String),
    /// No matching record exists, or no store is configured.
    #[error("{0} not found")]
    NotFound(&'static str),
    /// An order arrived without both compliance acknowledgements.
    #[error("Compliance acknowledgements are required")]
    ComplianceAcknowledgementMissing,
    /// A write needs a store and none is configured.
    #[error("Database not available")]
    StoreUnavailable,
    /// The store failed while serving the request.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
    /// A stored record could not be mapped to its entity type.
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            ApiError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "invalid_id"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::ComplianceAcknowledgementMissing => (
                StatusCode::BAD_REQUEST,
                "compliance_acknowledgement_missing",
            ),
            ApiError::StoreUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable")
            }
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        if let ApiError::Validation(details) = self {
            return details.into_response();
        }

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: error_type,
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}
