use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Per-query solver output: best known costs, predecessors and the set of
/// finalized nodes. A node absent from `costs` is unreachable from the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    costs: HashMap<NodeId, u64>,
    predecessors: HashMap<NodeId, NodeId>,
    visited: HashSet<NodeId>,
}

impl SearchState {
    /// Minimal cost from the origin, or `None` when unreachable.
    pub fn cost(&self, node: &str) -> Option<u64> {
        self.costs.get(node).copied()
    }

    /// Predecessor on the best known path. The origin has none.
    pub fn predecessor(&self, node: &str) -> Option<&str> {
        self.predecessors.get(node).map(String::as_str)
    }

    pub fn finalized_count(&self) -> usize {
        self.visited.len()
    }
}

/// Run Dijkstra's algorithm from `origin` until the frontier is exhausted.
///
/// The frontier is a min-heap with lazy deletion: stale entries for already
/// finalized nodes are discarded on pop. Only a strictly cheaper candidate
/// replaces a known cost, so the first shortest path discovered wins ties.
///
/// A candidate cost that overflows `u64` fails the whole search with
/// [`Error::CostOverflow`]; the node it would reach is not unreachable.
pub fn shortest_paths(graph: &Graph, origin: &str) -> Result<SearchState> {
    let mut state = SearchState::default();
    let mut queue = BinaryHeap::new();

    state.costs.insert(origin.to_string(), 0);
    queue.push(QueueEntry::new(origin.to_string(), 0));

    while let Some(entry) = queue.pop() {
        if !state.visited.insert(entry.node.clone()) {
            continue;
        }

        for edge in graph.neighbours(&entry.node) {
            let candidate =
                entry
                    .cost
                    .checked_add(edge.cost)
                    .ok_or_else(|| Error::CostOverflow {
                        origin: origin.to_string(),
                        node: edge.target.clone(),
                    })?;

            let improves = state
                .costs
                .get(&edge.target)
                .is_none_or(|known| candidate < *known);
            if improves {
                state.costs.insert(edge.target.clone(), candidate);
                state
                    .predecessors
                    .insert(edge.target.clone(), entry.node.clone());
                queue.push(QueueEntry::new(edge.target.clone(), candidate));
            }
        }
    }

    tracing::debug!(
        origin,
        reachable = state.costs.len(),
        finalized = state.visited.len(),
        "shortest path search exhausted frontier"
    );

    Ok(state)
}

/// Walk predecessors from `destination` back to `origin`.
///
/// Returns `Ok(None)` when the destination is unreachable. A chain that ends
/// anywhere other than the origin means the search state is corrupt and is
/// reported as [`Error::BrokenPredecessorChain`].
pub fn reconstruct_path(
    state: &SearchState,
    origin: &str,
    destination: &str,
) -> Result<Option<Vec<NodeId>>> {
    if state.cost(destination).is_none() {
        return Ok(None);
    }

    let broken = |node: &str| Error::BrokenPredecessorChain {
        origin: origin.to_string(),
        destination: destination.to_string(),
        node: node.to_string(),
    };

    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while current != origin {
        let previous = state.predecessor(current).ok_or_else(|| broken(current))?;
        // A finalize-once search cannot revisit a node; a longer chain is a cycle.
        if path.len() > state.costs.len() {
            return Err(broken(previous));
        }
        path.push(previous.to_string());
        current = previous;
    }

    path.reverse();
    Ok(Some(path))
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: u64,
}

impl QueueEntry {
    fn new(node: NodeId, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
