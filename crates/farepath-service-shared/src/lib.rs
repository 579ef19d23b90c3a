//! Shared infrastructure for the farepath HTTP services.
//!
//! - [`AppState`]: the route catalog behind an async read/write lock
//! - [`health`]: liveness and readiness handlers
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`ServiceResponse`]: success wrapper with content type
//! - [`metrics`], [`logging`], [`middleware`]: observability plumbing
//! - Request types with validation for each endpoint
//!
//! Handlers stay thin: they validate, take a catalog snapshot, and hand the
//! search to `farepath-lib`.
//!
//! Enable the `test-utils` feature to use [`test_utils`] from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_catalog_change, record_catalog_size, record_route_found,
    record_route_search, record_route_search_failed, MetricsConfig, MetricsError,
};
pub use middleware::{extract_or_generate_request_id, MetricsLayer, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_ENTRY_NOT_FOUND, PROBLEM_ROUTE_NOT_FOUND,
};
pub use request::{CreateRouteRequest, SearchRouteRequest, UpdateRouteRequest, Validate};
pub use response::ServiceResponse;
pub use state::{AppState, AppStateError};
