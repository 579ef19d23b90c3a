//! Route command handler for the cheapest route between two codes.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use farepath_lib::{
    plan_route, Error as RouteError, RouteRequest, RouteSummary, ROUTE_NOT_FOUND_MESSAGE,
};

use crate::commands::load_catalog;
use farepath_cli::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub from: String,
    pub to: String,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.trim(), self.to.trim())
    }
}

pub fn handle_route_command(
    routes_path: &Path,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let catalog = load_catalog(routes_path)?;
    let request = args.to_request();

    let plan = plan_route(&catalog.edges(), &request).map_err(handle_route_failure)?;
    let summary = RouteSummary::from_plan(&plan)?;
    tracing::debug!(hops = summary.hops, total_cost = summary.total_cost, "route found");

    render_route(&mut io::stdout().lock(), &summary, format).context("failed to write route")
}

fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::RouteNotFound { .. } => anyhow::anyhow!(ROUTE_NOT_FOUND_MESSAGE),
        other => anyhow::Error::new(other),
    }
}
