// Timeline figure builder
// Derives the per-locker event timeline from a single selected record

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::entities::LockerRecord;
use crate::value_objects::RecordId;

pub const PROMPT_MESSAGE: &str = "Click a marker to see the timeline!";
pub const UNAVAILABLE_MESSAGE: &str = "No timeline available for this locker.";

/// A timeline needs at least two dated events to be worth drawing.
pub const MIN_CHART_EVENTS: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct TimelinePoint {
    pub label: &'static str,
    pub at: NaiveDateTime,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimelineFigure {
    /// Nothing selected yet, or the click target fell out of the filtered
    /// rows.
    Prompt { message: &'static str },
    /// A locker is selected but carries fewer than two dated events.
    Unavailable { title: String, message: &'static str },
    /// Present events in true chronological order, one horizontal row.
    Chart { title: String, points: Vec<TimelinePoint> },
}

/// Resolves a clicked marker against the *current* filtered rows: by
/// synthetic id when the client sent one, otherwise by first address match
/// (addresses are not unique; first match preserves the observed lookup
/// behavior). A target excluded by the active filters resolves to nothing.
pub fn resolve_selection<'a>(
    rows: &[&'a LockerRecord],
    id: Option<RecordId>,
    address: Option<&str>,
) -> Option<&'a LockerRecord> {
    if let Some(id) = id {
        return rows.iter().find(|record| record.id == id).copied();
    }
    let address = address?.trim();
    if address.is_empty() {
        return None;
    }
    rows.iter().find(|record| record.address == address).copied()
}

pub fn timeline_figure(selected: Option<&LockerRecord>) -> TimelineFigure {
    let Some(record) = selected else {
        return TimelineFigure::Prompt {
            message: PROMPT_MESSAGE,
        };
    };

    let mut events = record.timeline_events();
    if events.len() < MIN_CHART_EVENTS {
        return TimelineFigure::Unavailable {
            title: record.display_title().to_string(),
            message: UNAVAILABLE_MESSAGE,
        };
    }
    events.sort_by_key(|event| event.at);

    TimelineFigure::Chart {
        title: record.display_title().to_string(),
        points: events
            .into_iter()
            .map(|event| TimelinePoint {
                label: event.kind.label(),
                at: event.at,
                color: event.kind.color(),
            })
            .collect(),
    }
}
