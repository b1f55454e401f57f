use tracing::debug;

use dashboard_domain::{
    filter_records, resolve_selection, timeline_figure, FilterSelection, RecordId, TimelineFigure,
};

use crate::AppState;

/// Rebuilds the timeline for a clicked marker, re-resolving the click
/// target against the rows the current filters leave visible. A target the
/// filters exclude (or a malformed click payload) degrades to the prompt
/// placeholder.
pub fn timeline_figure_for(
    state: &AppState,
    selection: &FilterSelection,
    id: Option<RecordId>,
    address: Option<&str>,
) -> TimelineFigure {
    let rows = filter_records(&state.dataset, selection);
    let selected = resolve_selection(&rows, id, address);
    if selected.is_none() && (id.is_some() || address.is_some()) {
        debug!(?id, ?address, "click target not in filtered rows, prompting");
    }
    let figure = timeline_figure(selected);
    state
        .metrics
        .record_timeline_render(matches!(figure, TimelineFigure::Prompt { .. }));
    figure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::test_support::app_state;

    #[test]
    fn no_click_yet_prompts() {
        let state = app_state();
        let figure = timeline_figure_for(&state, &FilterSelection::default(), None, None);
        assert!(matches!(figure, TimelineFigure::Prompt { .. }));
    }

    #[test]
    fn a_selected_locker_with_two_dates_charts() {
        let state = app_state();
        let figure = timeline_figure_for(
            &state,
            &FilterSelection::default(),
            Some(RecordId(0)),
            None,
        );
        match figure {
            TimelineFigure::Chart { title, points } => {
                assert_eq!(title, "10 Main St");
                assert_eq!(points.len(), 2);
            }
            other => panic!("expected chart, got {:?}", other),
        }
    }

    #[test]
    fn a_filter_change_that_excludes_the_selection_reverts_to_the_prompt() {
        let state = app_state();
        let queens_only = FilterSelection {
            borough: Some("Queens".to_string()),
            ..Default::default()
        };
        // Locker 0 sits in Brooklyn; with Queens selected it is filtered out.
        let figure = timeline_figure_for(&state, &queens_only, Some(RecordId(0)), Some("10 Main St"));
        assert!(matches!(figure, TimelineFigure::Prompt { .. }));
    }

    #[test]
    fn a_selected_locker_without_enough_dates_reports_unavailable() {
        let state = app_state();
        let figure = timeline_figure_for(
            &state,
            &FilterSelection::default(),
            None,
            Some("20 Side Ave"),
        );
        match figure {
            TimelineFigure::Unavailable { title, .. } => assert_eq!(title, "20 Side Ave"),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }
}
