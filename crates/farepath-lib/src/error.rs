use thiserror::Error;

use crate::catalog::RouteId;
use crate::graph::NodeId;

/// Convenient result alias for the farepath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when no route could be found between two location codes.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: NodeId, destination: NodeId },

    /// Raised when the predecessor chain produced by the solver does not lead
    /// back to the origin. Indicates a solver bug rather than a missing route.
    #[error("predecessor chain from {destination} broke at {node} before reaching {origin}")]
    BrokenPredecessorChain {
        origin: NodeId,
        destination: NodeId,
        node: NodeId,
    },

    /// Raised when a path cost no longer fits in `u64`.
    #[error("cost of the path from {origin} to {node} overflows")]
    CostOverflow { origin: NodeId, node: NodeId },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a route cannot be admitted to the catalog.
    #[error("invalid route: {message}")]
    InvalidRoute { message: String },

    /// Raised when a catalog entry with the given id does not exist.
    #[error("route {id} does not exist in the catalog")]
    RouteIdNotFound { id: RouteId },

    /// Raised when a route CSV file has an unusable layout or row.
    #[error("invalid route data: {message}")]
    RouteDataValidation { message: String },

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is the business-level "no route" outcome rather than
    /// a data or programming failure.
    pub fn is_route_not_found(&self) -> bool {
        matches!(self, Error::RouteNotFound { .. })
    }
}
