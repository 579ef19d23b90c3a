//! Prometheus metrics for the farepath services.
//!
//! - [`MetricsConfig`] / [`init_metrics`]: install the global recorder
//! - [`metrics_handler`]: render the `/metrics` exposition text
//! - `record_*`: business counters for searches and catalog changes
//!
//! ```no_run
//! use farepath_service_shared::metrics::{init_metrics, metrics_handler, MetricsConfig};
//! use axum::{routing::get, Router};
//!
//! init_metrics(&MetricsConfig::default()).expect("failed to initialize metrics");
//! let app: Router = Router::new().route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    /// Route the exposition endpoint is mounted on.
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: "/metrics".to_string(),
        }
    }
}

impl MetricsConfig {
    /// Read `METRICS_ENABLED` (anything but "false" enables) and `METRICS_PATH`.
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| !v.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        let path = std::env::var("METRICS_PATH")
            .ok()
            .filter(|p| p.starts_with('/'))
            .unwrap_or_else(|| "/metrics".to_string());

        Self { enabled, path }
    }
}

/// Install the Prometheus recorder. Call once at startup.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }
    if PROMETHEUS_HANDLE.get().is_some() {
        return Err(MetricsError::AlreadyInitialized);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)
}

/// `None` until [`init_metrics`] succeeds.
pub fn prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

pub async fn metrics_handler() -> String {
    prometheus_handle()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

#[derive(Debug, Clone)]
pub enum MetricsError {
    Disabled,
    AlreadyInitialized,
    InstallFailed(String),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetricsError::Disabled => write!(f, "metrics are disabled"),
            MetricsError::AlreadyInitialized => write!(f, "metrics recorder already initialized"),
            MetricsError::InstallFailed(e) => write!(f, "failed to install metrics recorder: {}", e),
        }
    }
}

impl std::error::Error for MetricsError {}

// =============================================================================
// Business metrics
// =============================================================================

/// Increments `farepath_route_searches_total`.
pub fn record_route_search(service: &str) {
    metrics::counter!(
        "farepath_route_searches_total",
        "service" => service.to_string()
    )
    .increment(1);
}

/// Increments `farepath_route_searches_failed_total`.
///
/// `reason` is one of `not_found`, `validation_error`, `internal_error`.
pub fn record_route_search_failed(reason: &str, service: &str) {
    metrics::counter!(
        "farepath_route_searches_failed_total",
        "reason" => reason.to_string(),
        "service" => service.to_string()
    )
    .increment(1);
}

/// Records hops and total cost of a found route.
pub fn record_route_found(hops: usize, total_cost: u64) {
    metrics::histogram!("farepath_route_hops").record(hops as f64);
    metrics::histogram!("farepath_route_total_cost").record(total_cost as f64);
}

/// Increments `farepath_catalog_changes_total`; `operation` is `create`, `update` or `delete`.
pub fn record_catalog_change(operation: &str) {
    metrics::counter!(
        "farepath_catalog_changes_total",
        "operation" => operation.to_string()
    )
    .increment(1);
}

/// Sets the `farepath_catalog_routes` gauge.
pub fn record_catalog_size(routes: usize) {
    metrics::gauge!("farepath_catalog_routes").set(routes as f64);
}
