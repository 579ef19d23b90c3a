//! Route catalog HTTP API.
//!
//! # Endpoints
//!
//! - `GET /api/v1/routes/search?origin=GRU&destination=CDG` - cheapest route
//! - `GET /api/v1/routes` - list catalog entries
//! - `POST /api/v1/routes` - add an entry
//! - `GET|PUT|DELETE /api/v1/routes/{id}` - read, replace or remove an entry
//! - `GET /health/live`, `GET /health/ready` - probes
//! - `GET /metrics` - Prometheus exposition (path configurable)

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::HeaderMap,
    routing::get,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use farepath_lib::{NodeId, Route, RouteId, RouteRequest, RouteSummary, plan_route};
use farepath_service_shared::{
    AppState, CreateRouteRequest, MetricsConfig, MetricsLayer, ProblemDetails, SearchRouteRequest,
    ServiceResponse, UpdateRouteRequest, Validate, extract_or_generate_request_id, from_lib_error,
    health_live, health_ready, metrics_handler, record_catalog_change, record_catalog_size,
    record_route_found, record_route_search, record_route_search_failed,
};

/// Label attached to business metrics emitted by this service.
const SERVICE: &str = "route";

type HandlerResult<T> = Result<ServiceResponse<T>, ProblemDetails>;

/// Body of a successful search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// `GRU => BRC => CDG ao custo de R$ 15`
    pub route: String,
    pub path: Vec<NodeId>,
    pub total_cost: u64,
    pub hops: usize,
}

impl From<RouteSummary> for SearchResponse {
    fn from(summary: RouteSummary) -> Self {
        Self {
            route: summary.description,
            path: summary.path,
            total_cost: summary.total_cost,
            hops: summary.hops,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub count: usize,
    pub routes: Vec<Route>,
}

/// Build the service router around `state`.
///
/// The metrics endpoint is mounted only when `metrics.enabled` is set.
pub fn app(state: AppState, metrics: &MetricsConfig) -> Router {
    let mut router = Router::new()
        .route("/api/v1/routes/search", get(search_route))
        .route("/api/v1/routes", get(list_routes).post(create_route))
        .route(
            "/api/v1/routes/{id}",
            get(get_route).put(update_route).delete(delete_route),
        )
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready));

    if metrics.enabled {
        router = router.route(&metrics.path, get(metrics_handler));
    }

    router
        .layer(MetricsLayer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle `GET /api/v1/routes/search`.
async fn search_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SearchRouteRequest>, QueryRejection>,
) -> HandlerResult<SearchResponse> {
    let request_id = extract_or_generate_request_id(&headers);
    let request_id = request_id.as_str();

    let request = query
        .map(|Query(request)| request)
        .map_err(|rejection| ProblemDetails::bad_request(rejection.body_text(), request_id))
        .and_then(|request| request.validate(request_id).map(|()| request).map_err(|p| *p))
        .inspect_err(|_| record_route_search_failed("validation_error", SERVICE))?;

    record_route_search(SERVICE);
    info!(
        request_id,
        origin = %request.origin,
        destination = %request.destination,
        "handling route search"
    );

    // The lock is released before the solver runs.
    let edges = state.edge_snapshot().await;
    let lib_request = RouteRequest::new(request.origin.trim(), request.destination.trim());

    let plan = plan_route(&edges, &lib_request).map_err(|e| {
        if e.is_route_not_found() {
            record_route_search_failed("not_found", SERVICE);
            info!(request_id, "no route between requested codes");
        } else {
            record_route_search_failed("internal_error", SERVICE);
            error!(request_id, error = %e, "route search failed");
        }
        from_lib_error(&e, request_id)
    })?;

    let summary = RouteSummary::from_plan(&plan).map_err(|e| from_lib_error(&e, request_id))?;
    record_route_found(summary.hops, summary.total_cost);
    info!(
        request_id,
        hops = summary.hops,
        total_cost = summary.total_cost,
        "route found"
    );

    Ok(ServiceResponse::new(summary.into()))
}

/// Handle `GET /api/v1/routes`.
async fn list_routes(State(state): State<AppState>) -> ServiceResponse<RouteListResponse> {
    let catalog = state.catalog().await;
    let routes: Vec<Route> = catalog.routes().into_iter().cloned().collect();

    ServiceResponse::new(RouteListResponse {
        count: routes.len(),
        routes,
    })
}

/// Handle `GET /api/v1/routes/{id}`.
async fn get_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<RouteId>, PathRejection>,
) -> HandlerResult<Route> {
    let request_id = extract_or_generate_request_id(&headers);
    let id = route_id(id, request_id.as_str())?;

    state
        .catalog()
        .await
        .get(id)
        .cloned()
        .map(ServiceResponse::new)
        .ok_or_else(|| ProblemDetails::route_entry_not_found(id, request_id.as_str()))
}

/// Handle `POST /api/v1/routes`.
async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateRouteRequest>, JsonRejection>,
) -> HandlerResult<Route> {
    let request_id = extract_or_generate_request_id(&headers);
    let request_id = request_id.as_str();
    let request = route_body(body, request_id)?;

    let mut catalog = state.catalog_mut().await;
    let route = catalog
        .add(request.to_new_route())
        .map_err(|e| from_lib_error(&e, request_id))?;
    record_catalog_size(catalog.len());
    drop(catalog);

    record_catalog_change("create");
    info!(request_id, id = route.id, "route created");
    Ok(ServiceResponse::created(route))
}

/// Handle `PUT /api/v1/routes/{id}`.
async fn update_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<RouteId>, PathRejection>,
    body: Result<Json<UpdateRouteRequest>, JsonRejection>,
) -> HandlerResult<Route> {
    let request_id = extract_or_generate_request_id(&headers);
    let request_id = request_id.as_str();
    let id = route_id(id, request_id)?;
    let request = route_body(body, request_id)?;

    let route = state
        .catalog_mut()
        .await
        .update(id, request.to_new_route())
        .map_err(|e| from_lib_error(&e, request_id))?;

    record_catalog_change("update");
    info!(request_id, id, "route updated");
    Ok(ServiceResponse::new(route))
}

/// Handle `DELETE /api/v1/routes/{id}`.
async fn delete_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<RouteId>, PathRejection>,
) -> HandlerResult<Route> {
    let request_id = extract_or_generate_request_id(&headers);
    let request_id = request_id.as_str();
    let id = route_id(id, request_id)?;

    let mut catalog = state.catalog_mut().await;
    let route = catalog
        .delete(id)
        .map_err(|e| from_lib_error(&e, request_id))?;
    record_catalog_size(catalog.len());
    drop(catalog);

    record_catalog_change("delete");
    info!(request_id, id, "route deleted");
    Ok(ServiceResponse::new(route))
}

fn route_id(
    id: Result<Path<RouteId>, PathRejection>,
    request_id: &str,
) -> Result<RouteId, ProblemDetails> {
    id.map(|Path(id)| id).map_err(|rejection| {
        warn!(request_id, error = %rejection.body_text(), "invalid route id");
        ProblemDetails::bad_request(rejection.body_text(), request_id)
    })
}

fn route_body(
    body: Result<Json<CreateRouteRequest>, JsonRejection>,
    request_id: &str,
) -> Result<CreateRouteRequest, ProblemDetails> {
    let Json(request) =
        body.map_err(|rejection| ProblemDetails::bad_request(rejection.body_text(), request_id))?;
    request.validate(request_id).map_err(|problem| *problem)?;
    Ok(request)
}
