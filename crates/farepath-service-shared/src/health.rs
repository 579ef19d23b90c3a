//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for Kubernetes liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, "ok" when healthy.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of catalog entries (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            routes_loaded: None,
        }
    }

    /// Create a ready status carrying the catalog size.
    pub fn ready(service: &str, version: &str, routes: usize) -> Self {
        Self {
            routes_loaded: Some(routes),
            ..Self::alive(service, version)
        }
    }
}

/// Liveness probe handler.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"farepath-service-shared","version":"0.1.0"}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// An empty catalog is still ready: routes can be added at runtime, and
/// every search against it simply reports no route.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"farepath-service-shared","version":"0.1.0","routes_loaded":7}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let routes = state.route_count().await;
    let status = HealthStatus::ready(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"), routes);
    (StatusCode::OK, Json(status))
}
