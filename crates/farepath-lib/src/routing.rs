use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{build_graph, Edge, NodeId};
use crate::path::{reconstruct_path, shortest_paths};

/// Result of a single least-cost query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Cheapest path, origin first and destination last.
    Found { path: Vec<NodeId>, total_cost: u64 },
    /// Destination is not reachable from the origin in this snapshot.
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Compute the least-cost path from `origin` to `destination` over `edges`.
///
/// The graph is rebuilt from the snapshot on every call. Errors are reserved
/// for cost overflow and corrupt solver state; an unreachable destination is
/// [`SearchOutcome::NotFound`].
pub fn search(edges: &[Edge], origin: &str, destination: &str) -> Result<SearchOutcome> {
    let graph = build_graph(edges);
    let state = shortest_paths(&graph, origin)?;

    let Some(path) = reconstruct_path(&state, origin, destination)? else {
        tracing::debug!(origin, destination, "destination unreachable");
        return Ok(SearchOutcome::NotFound);
    };

    // reconstruct_path only returns a path for nodes with a known cost.
    let total_cost = state.cost(destination).unwrap_or_default();
    Ok(SearchOutcome::Found { path, total_cost })
}

/// High-level route query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: NodeId,
    pub destination: NodeId,
}

impl RouteRequest {
    pub fn new(origin: impl Into<NodeId>, destination: impl Into<NodeId>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub origin: NodeId,
    pub destination: NodeId,
    pub path: Vec<NodeId>,
    pub total_cost: u64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Plan a route, turning an unreachable destination into
/// [`Error::RouteNotFound`].
pub fn plan_route(edges: &[Edge], request: &RouteRequest) -> Result<RoutePlan> {
    match search(edges, &request.origin, &request.destination)? {
        SearchOutcome::Found { path, total_cost } => Ok(RoutePlan {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            path,
            total_cost,
        }),
        SearchOutcome::NotFound => Err(Error::RouteNotFound {
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        }),
    }
}
