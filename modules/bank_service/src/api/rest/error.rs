//! HTTP error mapping to the bank API error body

use crate::contract::{BankError, Catalog};
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every bank endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// The HTTP status code
    pub status: u16,

    /// Human-readable message in the catalog language
    pub message: String,

    /// When the error was produced
    pub timestamp: DateTime<Utc>,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn internal(catalog: Catalog) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            catalog.internal_error_message(),
        )
    }
}

impl IntoResponse for ErrorBody {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

/// Map domain errors to HTTP error bodies
pub fn map_domain_error(catalog: Catalog, error: BankError) -> ErrorBody {
    match error {
        BankError::NotFound { .. } => ErrorBody::new(StatusCode::NOT_FOUND, error.to_string()),

        BankError::DuplicateCode { .. } => ErrorBody::new(StatusCode::CONFLICT, error.to_string()),

        BankError::Validation { .. } => ErrorBody::new(StatusCode::BAD_REQUEST, error.to_string()),

        BankError::Internal => ErrorBody::internal(catalog),
    }
}

/// Body that is not JSON, or has fields of the wrong type
pub fn map_json_rejection(catalog: Catalog, rejection: JsonRejection) -> ErrorBody {
    tracing::debug!(%catalog, error = %rejection, "rejected request body");
    ErrorBody::new(
        StatusCode::BAD_REQUEST,
        format!("{}{}", catalog.validation_prefix(), rejection.body_text()),
    )
}

/// Path id that is not an integer
pub fn map_path_rejection(catalog: Catalog, rejection: PathRejection) -> ErrorBody {
    tracing::debug!(%catalog, error = %rejection, "rejected path");
    ErrorBody::new(
        StatusCode::BAD_REQUEST,
        format!("{}id: {}", catalog.validation_prefix(), rejection.body_text()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::FieldViolation;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                BankError::NotFound {
                    catalog: Catalog::Bank,
                    id: 9,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                BankError::DuplicateCode {
                    catalog: Catalog::Bank,
                    code: "B1".to_string(),
                },
                StatusCode::CONFLICT,
            ),
            (
                BankError::Validation {
                    catalog: Catalog::Bank,
                    violations: vec![FieldViolation::new("code", "Code is required")],
                },
                StatusCode::BAD_REQUEST,
            ),
            (BankError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(map_domain_error(Catalog::Bank, error).status, status.as_u16());
        }
    }

    #[test]
    fn test_internal_message_does_not_leak() {
        let body = map_domain_error(Catalog::Banco, BankError::Internal);
        assert_eq!(body.message, "Error interno del servidor");
    }
}
