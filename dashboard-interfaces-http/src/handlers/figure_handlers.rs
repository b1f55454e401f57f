use axum::extract::{Query, State};
use axum::Json;

use dashboard_application::queries::{map_queries, timeline_queries};
use dashboard_application::AppState;
use dashboard_domain::{FilterSelection, MapFigure, RecordId, TimelineFigure};

/// Click payload plus the filter state it was made under. The id arrives as
/// a string so a malformed click payload degrades to the prompt placeholder
/// instead of rejecting the request.
#[derive(serde::Deserialize)]
pub struct TimelineParams {
    #[serde(rename = "type")]
    pub locker_type: Option<String>,
    pub location_type: Option<String>,
    pub borough: Option<String>,
    pub locker_size: Option<String>,
    pub status: Option<String>,
    pub id: Option<String>,
    pub address: Option<String>,
}

impl TimelineParams {
    fn into_parts(self) -> (FilterSelection, Option<RecordId>, Option<String>) {
        let selection = FilterSelection {
            locker_type: self.locker_type,
            location_type: self.location_type,
            borough: self.borough,
            locker_size: self.locker_size,
            status: self.status,
        };
        let id = self
            .id
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .map(RecordId);
        (selection, id, self.address)
    }
}

pub async fn get_map_figure(
    State(state): State<AppState>,
    Query(selection): Query<FilterSelection>,
) -> Json<MapFigure> {
    Json(map_queries::map_figure_for(&state, &selection))
}

pub async fn get_timeline_figure(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> Json<TimelineFigure> {
    let (selection, id, address) = params.into_parts();
    Json(timeline_queries::timeline_figure_for(
        &state,
        &selection,
        id,
        address.as_deref(),
    ))
}
