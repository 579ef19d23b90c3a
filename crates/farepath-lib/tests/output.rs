mod common;

use farepath_lib::{
    format_route, plan_route, RouteCatalog, RouteRenderMode, RouteRequest, RouteSummary,
};

fn fixture_summary(origin: &str, destination: &str) -> RouteSummary {
    let catalog = RouteCatalog::from_path(&common::fixtures_dir().join("routes.csv"))
        .expect("fixture catalog loads");
    let plan = plan_route(&catalog.edges(), &RouteRequest::new(origin, destination))
        .expect("fixture route exists");
    RouteSummary::from_plan(&plan).expect("summary from plan")
}

#[test]
fn plain_text_matches_catalog_message_format() {
    let summary = fixture_summary("GRU", "CDG");

    assert_eq!(
        summary.render(RouteRenderMode::PlainText),
        "GRU => BRC => SCL => ORL => CDG ao custo de R$ 40"
    );
    assert_eq!(summary.hops, 4);
}

#[test]
fn listing_renders_one_stop_per_line() {
    let rendered = fixture_summary("GRU", "SCL").render(RouteRenderMode::Listing);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Route from GRU to SCL (2 hops):",
            "  + GRU",
            "  | BRC",
            "  - SCL",
            "Total cost: R$ 15",
        ]
    );
}

#[test]
fn single_node_path_has_no_separator() {
    assert_eq!(format_route(&["GRU".to_string()], 0), "GRU ao custo de R$ 0");

    let summary = fixture_summary("ORL", "ORL");
    assert_eq!(summary.hops, 0);
    assert_eq!(summary.description, "ORL ao custo de R$ 0");
}

#[test]
fn summary_serializes_for_consumers() {
    let value = serde_json::to_value(fixture_summary("BRC", "ORL")).expect("serialize");

    assert_eq!(value["origin"], "BRC");
    assert_eq!(value["destination"], "ORL");
    assert_eq!(value["total_cost"], 25);
    assert_eq!(value["path"], serde_json::json!(["BRC", "SCL", "ORL"]));
}
