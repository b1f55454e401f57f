use dashboard_domain::{filter_catalog, FilterCatalog};

use crate::AppState;

/// Dropdown option sets for the sidebar, derived once per request from the
/// immutable dataset.
pub fn filter_catalog_for(state: &AppState) -> FilterCatalog {
    filter_catalog(&state.dataset)
}
