use axum::extract::State;
use axum::Json;

use dashboard_application::queries::catalog_queries;
use dashboard_application::AppState;
use dashboard_domain::FilterCatalog;

pub async fn get_filter_catalog(State(state): State<AppState>) -> Json<FilterCatalog> {
    Json(catalog_queries::filter_catalog_for(&state))
}
