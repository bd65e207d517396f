//! # Input Validation Module
//!
//! Request bodies are deserialized and checked against the schema rules
//! declared on the `peptide-types` entities before any handler logic runs.
//!
//! Every failure, whether the body is not JSON, misses a required field, has
//! a wrong type or breaks a range rule, is reported as `422 Unprocessable
//! Entity` with field-level details.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use peptide_node::validation::ValidatedJson;
//! use peptide_types::PeptideProduct;
//!
//! async fn create(ValidatedJson(product): ValidatedJson<PeptideProduct>) {
//!     // `product` passed every schema rule
//! }
//! ```

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::ApiError;

/// Validation error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    /// Error type.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Field-level error details.
    pub details: Vec<FieldError>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    /// Field path, e.g. `price` or `items[0].quantity`.
    pub field: String,
    /// Error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

impl ValidationErrorResponse {
    fn new(details: Vec<FieldError>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: "Validation failed".to_string(),
            details,
        }
    }
}

impl IntoResponse for ValidationErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

/// Convert ValidationErrors to our error response.
impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = Vec::new();
        collect_field_errors("", &errors, &mut details);
        details.sort_by(|a, b| a.field.cmp(&b.field));
        Self::new(details)
    }
}

/// Convert body extraction failures to our error response.
impl From<JsonRejection> for ValidationErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let code = match &rejection {
            JsonRejection::JsonDataError(_) => "invalid_data",
            JsonRejection::JsonSyntaxError(_) => "invalid_json",
            JsonRejection::MissingJsonContentType(_) => "missing_content_type",
            _ => "invalid_body",
        };

        Self::new(vec![FieldError {
            field: "body".to_string(),
            code: code.to_string(),
            message: rejection.body_text(),
        }])
    }
}

/// Flattens nested validation errors into dotted/indexed field paths.
fn collect_field_errors(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    code: e.code.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Validation failed for field '{}'", path)),
                }));
            }
            ValidationErrorsKind::Struct(inner) => collect_field_errors(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_field_errors(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}

/// JSON body extractor that enforces the target type's schema rules.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.into()))?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(errors.into()))?;

        Ok(Self(value))
    }
}
