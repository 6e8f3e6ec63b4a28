use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::error::DbErr;
use tracing::{debug, error};

use crate::{i18n::trans, validation::FieldErrors, ApiResponse};

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Validation failed on {} field(s)", .0.len())]
    ValidationError(FieldErrors),

    /// Missing, malformed or expired bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated principal without any of the required roles.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Carries the catalog key of the not-found message.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        ServiceError::ValidationError(errors)
    }
}

impl ServiceError {
    /// Not found for the given resource, e.g. `"repair_request"`.
    pub fn not_found(resource: &str) -> Self {
        ServiceError::NotFound(format!("messages.{}.not_found", resource))
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::SerializationError(_) | Self::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Localized envelope message. Internal failures never expose their detail.
    pub fn response_message(&self) -> String {
        match self {
            Self::ValidationError(_) => trans("validation.failed"),
            Self::Unauthorized(_) => trans("auth.unauthenticated"),
            Self::Forbidden(_) => trans("auth.role_denied"),
            Self::NotFound(key) => trans(key),
            Self::BadRequest(_) => trans("errors.bad_request"),
            Self::DatabaseError(_) | Self::SerializationError(_) | Self::InternalError(_) => {
                trans("errors.internal")
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.response_message();

        if status.is_server_error() {
            let request_id = crate::tracing::current_request_id()
                .map(|id| id.to_string())
                .unwrap_or_default();
            error!(error = %self, request_id = %request_id, "request failed");
        } else if let Self::BadRequest(detail) = &self {
            debug!(detail = %detail, "rejected request body");
        }

        let errors = match self {
            Self::ValidationError(errors) => errors,
            _ => FieldErrors::default(),
        };

        ApiResponse::<serde_json::Value>::failure(status, message, errors).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(error: ServiceError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            ServiceError::ValidationError(FieldErrors::default()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ServiceError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServiceError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::not_found("category").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::DatabaseError(DbErr::Custom("boom".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn validation_error_renders_field_messages() {
        let mut errors = FieldErrors::default();
        errors.add("customer_name", "The customer_name field is required.");

        let (status, body) = body_of(ServiceError::from(errors)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({
                "status": 422,
                "message": "The given data was invalid.",
                "errors": { "customer_name": ["The customer_name field is required."] }
            })
        );
    }

    #[tokio::test]
    async fn forbidden_uses_role_denial_message() {
        let (status, body) = body_of(ServiceError::Forbidden("ADMIN".into())).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "User does not have the right roles.");
        assert_eq!(body["errors"], json!({}));
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let (status, body) =
            body_of(ServiceError::DatabaseError(DbErr::Custom("secret dsn".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "An internal error occurred.");
        assert!(!body.to_string().contains("secret dsn"));
    }

    #[tokio::test]
    async fn bad_request_keeps_parser_detail_out_of_the_body() {
        let error = ServiceError::BadRequest("malformed JSON body: EOF while parsing".into());
        let (status, body) = body_of(error).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "The request body could not be parsed.");
        assert_eq!(body["errors"], json!({}));
        assert!(!body.to_string().contains("EOF while parsing"));

        let (_, body) = crate::i18n::scope_locale(
            "es",
            body_of(ServiceError::BadRequest("trailing characters".into())),
        )
        .await;
        assert_eq!(
            body["message"],
            "No se pudo interpretar el cuerpo de la solicitud."
        );
    }

    #[tokio::test]
    async fn not_found_is_localized() {
        let (_, body) =
            crate::i18n::scope_locale("es", body_of(ServiceError::not_found("category"))).await;
        assert_eq!(body["message"], "Categoría no encontrada.");
    }
}
