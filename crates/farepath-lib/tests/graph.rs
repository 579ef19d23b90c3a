mod common;

use common::edges;
use farepath_lib::{build_graph, Edge, Neighbour, NewRoute, RouteCatalog};

fn neighbour(target: &str, cost: u64) -> Neighbour {
    Neighbour {
        target: target.to_string(),
        cost,
    }
}

#[test]
fn neighbours_follow_edge_input_order() {
    let graph = build_graph(&edges(&[
        ("AAA", "CCC", 10),
        ("BBB", "CCC", 1),
        ("AAA", "BBB", 5),
    ]));

    assert_eq!(
        graph.neighbours("AAA"),
        &[neighbour("CCC", 10), neighbour("BBB", 5)]
    );
    assert_eq!(graph.neighbours("BBB"), &[neighbour("CCC", 1)]);
}

#[test]
fn parallel_edges_are_kept() {
    let graph = build_graph(&edges(&[("AAA", "BBB", 3), ("AAA", "BBB", 3)]));

    assert_eq!(graph.neighbours("AAA").len(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn self_loops_are_inserted() {
    let graph = build_graph(&edges(&[("AAA", "AAA", 2)]));
    assert_eq!(graph.neighbours("AAA"), &[neighbour("AAA", 2)]);
}

#[test]
fn only_origins_become_keys() {
    let graph = build_graph(&edges(&[("AAA", "BBB", 1), ("CCC", "BBB", 1)]));

    assert_eq!(graph.node_count(), 2);
    assert!(graph.neighbours("BBB").is_empty());
}

#[test]
fn catalog_snapshot_edges_compare_by_value() {
    let mut catalog = RouteCatalog::new();
    catalog
        .add(NewRoute::new(" AAA ", "BBB", 7))
        .expect("valid route");

    let snapshot = catalog.edges();
    assert_eq!(snapshot, vec![Edge::new("AAA", "BBB", 7)]);

    let copy = snapshot[0].clone();
    assert_eq!(
        (copy.origin(), copy.destination(), copy.cost()),
        ("AAA", "BBB", 7)
    );
}
