mod common;

use std::io::Cursor;

use farepath_lib::{Error, NewRoute, RouteCatalog, SearchOutcome};

fn fixture_catalog() -> RouteCatalog {
    RouteCatalog::from_path(&common::fixtures_dir().join("routes.csv")).expect("fixture loads")
}

#[test]
fn fixture_loads_every_row() {
    let catalog = fixture_catalog();

    assert_eq!(catalog.len(), 7);
    assert!(catalog.source_path().is_some());
    let first = catalog.get(1).expect("first route present");
    assert_eq!(
        (first.origin.as_str(), first.destination.as_str(), first.cost),
        ("GRU", "BRC", 10)
    );
}

#[test]
fn zero_cost_is_rejected() {
    let mut catalog = RouteCatalog::new();
    let error = catalog
        .add(NewRoute::new("AAA", "BBB", 0))
        .expect_err("zero cost");
    assert!(matches!(error, Error::InvalidRoute { .. }));
    assert!(catalog.is_empty());
}

#[test]
fn negative_cost_is_rejected() {
    let mut catalog = RouteCatalog::new();
    let error = catalog
        .add(NewRoute::new("AAA", "BBB", -4))
        .expect_err("negative cost");
    assert!(error.to_string().contains("greater than zero"));
}

#[test]
fn blank_codes_are_rejected() {
    let mut catalog = RouteCatalog::new();
    assert!(catalog.add(NewRoute::new("  ", "BBB", 1)).is_err());
    assert!(catalog.add(NewRoute::new("AAA", "", 1)).is_err());
}

#[test]
fn update_changes_search_results() {
    let mut catalog = fixture_catalog();
    // GRU -> CDG direct (id 3) becomes the cheapest option.
    let updated = catalog
        .update(3, NewRoute::new("GRU", "CDG", 30))
        .expect("route exists");
    assert_eq!(updated.id, 3);

    let outcome = catalog.search("GRU", "CDG").expect("search succeeds");
    assert_eq!(
        outcome,
        SearchOutcome::Found {
            path: vec!["GRU".to_string(), "CDG".to_string()],
            total_cost: 30,
        }
    );
}

#[test]
fn update_of_unknown_id_fails() {
    let mut catalog = RouteCatalog::new();
    let error = catalog
        .update(42, NewRoute::new("AAA", "BBB", 1))
        .expect_err("unknown id");
    assert!(matches!(error, Error::RouteIdNotFound { id: 42 }));
}

#[test]
fn delete_removes_edge_from_snapshot() {
    let mut catalog = RouteCatalog::new();
    let route = catalog.add(NewRoute::new("AAA", "BBB", 1)).unwrap();

    let removed = catalog.delete(route.id).expect("route exists");
    assert_eq!(removed, route);
    assert!(catalog.edges().is_empty());
    assert!(matches!(
        catalog.delete(route.id),
        Err(Error::RouteIdNotFound { .. })
    ));

    let outcome = catalog.search("AAA", "BBB").expect("search succeeds");
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn invalid_csv_row_reports_line() {
    let csv = "origin,destination,cost\nAAA,BBB,1\nBBB,CCC,abc\n";
    let error = RouteCatalog::from_reader(Cursor::new(csv)).expect_err("bad cost");
    let message = error.to_string();
    assert!(message.contains("row 3"), "{message}");
}

#[test]
fn csv_zero_cost_row_is_rejected() {
    let csv = "from,to,price\nAAA,BBB,0\n";
    let error = RouteCatalog::from_reader(Cursor::new(csv)).expect_err("zero cost");
    assert!(matches!(error, Error::RouteDataValidation { .. }));
}

#[test]
fn overflowing_itinerary_cost_is_an_error_not_a_missing_route() {
    let mut catalog = RouteCatalog::new();
    for (origin, destination) in [("AAA", "BBB"), ("BBB", "CCC"), ("CCC", "DDD")] {
        catalog
            .add(NewRoute::new(origin, destination, i64::MAX))
            .expect("largest accepted cost");
    }

    let error = catalog.search("AAA", "DDD").expect_err("cost overflows");
    assert!(matches!(error, Error::CostOverflow { .. }));
    assert!(!error.is_route_not_found());

    // The search from AAA finalizes every reachable node, so nearer
    // destinations fail the same way.
    assert!(matches!(
        catalog.search("AAA", "CCC"),
        Err(Error::CostOverflow { .. })
    ));
    assert!(catalog.search("BBB", "DDD").is_ok());
}
