use dashboard_domain::{filter_records, map_figure, FilterSelection, MapCenter, MapFigure};

use crate::AppState;

/// Re-runs the filter engine and rebuilds the map figure. Pure with respect
/// to the dataset; called on every filter change.
pub fn map_figure_for(state: &AppState, selection: &FilterSelection) -> MapFigure {
    let rows = filter_records(&state.dataset, selection);
    let fallback = MapCenter {
        lat: state.config.default_center_lat,
        lon: state.config.default_center_lon,
    };
    let figure = map_figure(&rows, fallback, state.config.map_zoom);
    state.metrics.record_map_render();
    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::app_state;

    #[test]
    fn filters_shrink_the_marker_set() {
        let state = app_state();
        let all = map_figure_for(&state, &FilterSelection::default());
        let brooklyn = map_figure_for(
            &state,
            &FilterSelection {
                borough: Some("Brooklyn".to_string()),
                ..Default::default()
            },
        );
        assert!(brooklyn.markers.len() < all.markers.len());
        assert!(brooklyn.markers.iter().all(|m| m.address != "30 Hill Rd"));
    }

    #[test]
    fn impossible_selection_yields_the_configured_fallback_center() {
        let state = app_state();
        let figure = map_figure_for(
            &state,
            &FilterSelection {
                borough: Some("Staten Island".to_string()),
                ..Default::default()
            },
        );
        assert!(figure.markers.is_empty());
        assert_eq!(figure.center.lat, state.config.default_center_lat);
        assert_eq!(figure.center.lon, state.config.default_center_lon);
    }
}
