use axum::Router;

use dashboard_application::AppState;

use crate::handlers::{catalog_handlers, figure_handlers, ops_handlers, page_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(page_handlers::index))
        .route(
            "/v1/catalog/filters",
            axum::routing::get(catalog_handlers::get_filter_catalog),
        )
        .route(
            "/v1/figures/map",
            axum::routing::get(figure_handlers::get_map_figure),
        )
        .route(
            "/v1/figures/timeline",
            axum::routing::get(figure_handlers::get_timeline_figure),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
