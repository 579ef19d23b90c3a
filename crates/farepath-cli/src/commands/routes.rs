//! Lists the catalog entries.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::commands::load_catalog;
use farepath_cli::output::{render_routes, OutputFormat};

pub fn handle_routes_command(routes_path: &Path, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(routes_path)?;
    render_routes(&mut io::stdout().lock(), &catalog.routes(), format)
        .context("failed to write routes")
}
