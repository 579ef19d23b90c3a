//! Common test utilities and fixture helpers.

use std::collections::HashSet;
use std::path::PathBuf;

use farepath_lib::Edge;

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Shorthand for building an edge list from tuples.
#[allow(dead_code)]
pub fn edges(list: &[(&str, &str, u64)]) -> Vec<Edge> {
    list.iter()
        .map(|(origin, destination, cost)| Edge::new(*origin, *destination, *cost))
        .collect()
}

/// Node codes used by generated graphs.
#[allow(dead_code)]
pub const NODES: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];

/// Deterministic pseudo-random edge list (parallel edges and self-loops included).
#[allow(dead_code)]
pub fn generated_edges(seed: u64) -> Vec<Edge> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut next = |bound: u64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) % bound
    };

    let count = next(12);
    (0..count)
        .map(|_| {
            let origin = NODES[next(NODES.len() as u64) as usize];
            let destination = NODES[next(NODES.len() as u64) as usize];
            let cost = next(9) + 1;
            Edge::new(origin, destination, cost)
        })
        .collect()
}

/// Cheapest cost over all simple paths from `origin` to `destination`,
/// found by exhaustive enumeration.
#[allow(dead_code)]
pub fn brute_force_cost(edges: &[Edge], origin: &str, destination: &str) -> Option<u64> {
    fn walk(
        edges: &[Edge],
        current: &str,
        destination: &str,
        cost: u64,
        seen: &mut HashSet<String>,
        best: &mut Option<u64>,
    ) {
        if current == destination {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in edges.iter().filter(|e| e.origin() == current) {
            if seen.contains(edge.destination()) {
                continue;
            }
            seen.insert(edge.destination().to_string());
            walk(edges, edge.destination(), destination, cost + edge.cost(), seen, best);
            seen.remove(edge.destination());
        }
    }

    let mut seen = HashSet::from([origin.to_string()]);
    let mut best = None;
    walk(edges, origin, destination, 0, &mut seen, &mut best);
    best
}

/// Cheapest single edge between two consecutive path nodes.
#[allow(dead_code)]
pub fn cheapest_edge(edges: &[Edge], origin: &str, destination: &str) -> Option<u64> {
    edges
        .iter()
        .filter(|e| e.origin() == origin && e.destination() == destination)
        .map(Edge::cost)
        .min()
}
