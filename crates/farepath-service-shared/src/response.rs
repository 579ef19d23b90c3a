//! Response wrapper for successful HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Wrapper for successful responses with content type metadata.
///
/// This provides symmetry with `ProblemDetails` by including content type
/// information in the response body.
///
/// # Example
///
/// ```
/// use farepath_service_shared::ServiceResponse;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct SearchResult {
///     route: String,
///     total_cost: u64,
/// }
///
/// let result = SearchResult { route: "GRU => BRC ao custo de R$ 10".into(), total_cost: 10 };
/// let response = ServiceResponse::new(result);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,

    /// HTTP status to send; not part of the body.
    #[serde(skip, default = "default_status")]
    pub status: u16,
}

fn default_status() -> u16 {
    StatusCode::OK.as_u16()
}

impl<T> ServiceResponse<T> {
    /// Create a 200 OK response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
            status: default_status(),
        }
    }

    /// Create a 201 Created response.
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED.as_u16(),
            ..Self::new(data)
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: i32,
    }

    #[test]
    fn test_response_serialization() {
        let response = ServiceResponse::new(TestData { value: 42 });
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"value\":42"));
        assert!(json.contains("\"content_type\":\"application/json\""));
        assert!(!json.contains("status"));
    }

    #[test]
    fn test_created_status() {
        let response = ServiceResponse::created(TestData { value: 1 });
        assert_eq!(response.status, 201);
        assert_eq!(response.into_response().status(), StatusCode::CREATED);
    }

    #[test]
    fn test_response_from_trait() {
        let data = TestData { value: 99 };
        let response: ServiceResponse<TestData> = data.clone().into();
        assert_eq!(response.data, data);
        assert_eq!(response.status, 200);
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"value":42,"content_type":"application/json"}"#;
        let response: ServiceResponse<TestData> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.value, 42);
        assert_eq!(response.status, 200);
    }
}
