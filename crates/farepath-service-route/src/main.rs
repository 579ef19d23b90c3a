//! Route catalog HTTP service.
//!
//! # Configuration
//!
//! - `FAREPATH_ROUTES_PATH` - CSV used to seed the catalog (optional; empty catalog otherwise)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint

use std::env;
use std::net::SocketAddr;

use tracing::{error, info, warn};

use farepath_service_route::app;
use farepath_service_shared::{
    AppState, LoggingConfig, MetricsConfig, init_logging, init_metrics, record_catalog_size,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("route");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = match env::var("FAREPATH_ROUTES_PATH") {
        Ok(path) if !path.is_empty() => AppState::load(&path).map_err(|e| {
            error!(error = %e, path = %path, "failed to load route catalog");
            e
        })?,
        _ => {
            warn!("FAREPATH_ROUTES_PATH not set, starting with an empty catalog");
            AppState::empty()
        }
    };

    let routes = state.route_count().await;
    record_catalog_size(routes);
    info!(routes, port, "starting route service");

    let router = app(state, &metrics_config);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
