//! farepath library entry points.
//!
//! This crate holds the route catalog and the least-cost search engine: a flat
//! edge list is turned into an adjacency graph, Dijkstra runs from the origin,
//! the predecessor chain is walked back from the destination, and the result
//! is reported as a formatted path with its total cost or as "not found".
//! Higher-level consumers (CLI, HTTP service) should only depend on the
//! functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use catalog::{NewRoute, Route, RouteCatalog, RouteId};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, Neighbour, NodeId};
pub use output::{format_route, RouteRenderMode, RouteSummary, ROUTE_NOT_FOUND_MESSAGE};
pub use path::{reconstruct_path, shortest_paths, SearchState};
pub use routing::{plan_route, search, RoutePlan, RouteRequest, SearchOutcome};
