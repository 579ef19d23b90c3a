use std::collections::HashMap;

/// Opaque, case-sensitive location code (typically three letters).
pub type NodeId = String;

/// Directed, positively weighted connection between two location codes.
///
/// Edges are immutable once constructed. Parallel edges and self-loops are
/// legal; the catalog guarantees `cost > 0` before an edge is ever built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    origin: NodeId,
    destination: NodeId,
    cost: u64,
}

impl Edge {
    pub fn new(origin: impl Into<NodeId>, destination: impl Into<NodeId>, cost: u64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }
}

/// Outgoing edge stored in the adjacency list of its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbour {
    pub target: NodeId,
    pub cost: u64,
}

/// Adjacency structure used by the shortest-path solver.
///
/// Only nodes that appear as an edge origin are keys. Nodes that are only
/// ever a destination are discovered while relaxing edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<NodeId, Vec<Neighbour>>,
}

impl Graph {
    /// Return the outgoing edges of `node` in input order.
    pub fn neighbours(&self, node: &str) -> &[Neighbour] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Build the routing graph from a flat edge list.
///
/// Neighbours are appended in edge input order under their origin.
pub fn build_graph(edges: &[Edge]) -> Graph {
    let mut adjacency: HashMap<NodeId, Vec<Neighbour>> = HashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.origin.clone())
            .or_default()
            .push(Neighbour {
                target: edge.destination.clone(),
                cost: edge.cost,
            });
    }
    Graph { adjacency }
}
