//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use to
//! read and mutate the route catalog.

use std::path::Path;
use std::sync::Arc;

use farepath_lib::{Edge, Error as LibError, RouteCatalog};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load the seed catalog.
    CatalogLoad(LibError),

    /// Seed catalog file not found.
    CatalogNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogLoad(e) => write!(f, "failed to load route catalog: {}", e),
            Self::CatalogNotFound(path) => write!(f, "route catalog not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CatalogLoad(e) => Some(e),
            Self::CatalogNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::CatalogLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; every clone shares the same catalog. Writes are
/// serialized through the lock, while searches copy an edge snapshot under the
/// read lock and run the solver without holding it.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use farepath_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let edges = state.edge_snapshot().await;
///     // ... search over edges
/// }
///
/// let state = AppState::load("routes.csv").unwrap();
/// let app = Router::new()
///     .route("/api/v1/routes/search", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<RwLock<RouteCatalog>>,
}

impl AppState {
    /// Seed the catalog from a CSV file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(AppStateError::CatalogNotFound(path.display().to_string()));
        }

        tracing::info!(path = %path.display(), "loading route catalog");
        let catalog = RouteCatalog::from_path(path)?;
        tracing::info!(route_count = catalog.len(), "route catalog loaded successfully");

        Ok(Self::from_catalog(catalog))
    }

    /// Create application state around an existing catalog.
    pub fn from_catalog(catalog: RouteCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Create application state with an empty catalog.
    pub fn empty() -> Self {
        Self::from_catalog(RouteCatalog::new())
    }

    /// Shared read access to the catalog.
    pub async fn catalog(&self) -> RwLockReadGuard<'_, RouteCatalog> {
        self.inner.read().await
    }

    /// Exclusive write access to the catalog.
    pub async fn catalog_mut(&self) -> RwLockWriteGuard<'_, RouteCatalog> {
        self.inner.write().await
    }

    /// Consistent copy of every stored edge, taken under the read lock.
    pub async fn edge_snapshot(&self) -> Vec<Edge> {
        self.inner.read().await.edges()
    }

    /// Number of stored routes.
    pub async fn route_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let route_count = self.inner.try_read().map(|catalog| catalog.len()).ok();
        f.debug_struct("AppState")
            .field("route_count", &route_count)
            .finish()
    }
}
