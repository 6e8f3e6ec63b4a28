use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{errors::ServiceError, i18n::trans, ApiResponse, AppState};

/// Handler result carrying the JSON envelope.
pub type ApiResult = Result<ApiResponse, ServiceError>;

/// JSON request body as a loose map, ready for a rule set.
///
/// An empty body is treated as `{}`, as is any JSON value that is not an
/// object. Malformed JSON is rejected with 400.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ServiceError::BadRequest(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Payload(Value::Object(Map::new())));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::BadRequest(format!("malformed JSON body: {}", e)))?;

        Ok(match value {
            Value::Object(_) => Payload(value),
            _ => Payload(Value::Object(Map::new())),
        })
    }
}

/// Resolution of an `:id` path segment to a live record.
#[async_trait]
pub trait RouteBinding: Sized {
    /// Resource name used for the not-found message key.
    const RESOURCE: &'static str;

    async fn resolve(state: &AppState, id: i32) -> Result<Option<Self>, ServiceError>;
}

/// Record bound from the `:id` path segment. A non-numeric id or a missing
/// or soft-deleted row rejects with 404 before the handler runs.
#[derive(Debug, Clone)]
pub struct Bound<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<AppState> for Bound<T>
where
    T: RouteBinding + Send,
{
    type Rejection = ServiceError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!(resource = T::RESOURCE, error = %e, "unresolvable route id");
                ServiceError::not_found(T::RESOURCE)
            })?;

        T::resolve(state, id)
            .await?
            .map(Bound)
            .ok_or_else(|| ServiceError::not_found(T::RESOURCE))
    }
}

/// `{ key: value }` for the envelope's `data` member.
pub fn data_entry<T: Serialize>(key: &str, value: &T) -> Result<Value, ServiceError> {
    let mut data = Map::new();
    data.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(data))
}

/// Success envelope with a single named data entry.
pub fn respond_with<T: Serialize>(message_key: &str, key: &str, value: &T) -> ApiResult {
    Ok(ApiResponse::success(trans(message_key), data_entry(key, value)?))
}

/// Success envelope without `data`.
pub fn respond_empty(message_key: &str) -> ApiResult {
    Ok(ApiResponse::message_only(trans(message_key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use assert_matches::assert_matches;
    use serde_json::json;

    async fn payload_of(body: &'static str) -> Result<Payload, ServiceError> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        Payload::from_request(request, &()).await
    }

    #[tokio::test]
    async fn blank_body_is_empty_object() {
        let Payload(value) = payload_of("").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn non_object_body_is_empty_object() {
        let Payload(value) = payload_of("[1, 2, 3]").await.unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        assert_matches!(
            payload_of("{\"customer_name\": ").await,
            Err(ServiceError::BadRequest(_))
        );
    }

    #[test]
    fn data_entry_wraps_value_under_key() {
        let value = data_entry("categories", &vec!["a", "b"]).unwrap();
        assert_eq!(value, json!({ "categories": ["a", "b"] }));
    }
}
