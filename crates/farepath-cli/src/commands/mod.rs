// One module per subcommand; main.rs only parses arguments and dispatches.

pub mod route;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};

use farepath_lib::RouteCatalog;

/// Load the catalog every subcommand reads from.
pub fn load_catalog(path: &Path) -> Result<RouteCatalog> {
    RouteCatalog::from_path(path)
        .with_context(|| format!("failed to load routes from {}", path.display()))
}
