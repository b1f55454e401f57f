// Locker entities
// One record per installed locker, loaded once at startup

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::{EventKind, RecordId};

/// One row of the source dataset. Immutable after load; the four lifecycle
/// timestamps are optional because the source data leaves them blank for
/// lockers that never saw the corresponding event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockerRecord {
    pub id: RecordId,
    pub address: String,
    pub locker_name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub locker_type: String,
    pub location_type: String,
    pub borough: String,
    pub size_text: String,
    pub status: String,
    pub bubble_size: u32,
    pub delivery_at: Option<NaiveDateTime>,
    pub receive_at: Option<NaiveDateTime>,
    pub withdraw_at: Option<NaiveDateTime>,
    pub expire_at: Option<NaiveDateTime>,
}

impl LockerRecord {
    /// Heading used above the timeline: the locker name when one exists,
    /// otherwise the address.
    pub fn display_title(&self) -> &str {
        match &self.locker_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.address,
        }
    }

    pub fn event_timestamp(&self, kind: EventKind) -> Option<NaiveDateTime> {
        match kind {
            EventKind::Delivery => self.delivery_at,
            EventKind::Receive => self.receive_at,
            EventKind::Withdraw => self.withdraw_at,
            EventKind::Expire => self.expire_at,
        }
    }

    /// The present lifecycle events, in declaration order. Callers that
    /// need chronological order sort by timestamp.
    pub fn timeline_events(&self) -> Vec<TimelineEvent> {
        EventKind::ALL
            .iter()
            .filter_map(|kind| {
                self.event_timestamp(*kind).map(|at| TimelineEvent {
                    kind: *kind,
                    at,
                })
            })
            .collect()
    }
}

/// A (kind, timestamp) pair derived transiently from a selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent {
    pub kind: EventKind,
    pub at: NaiveDateTime,
}

/// The full table, loaded once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<LockerRecord>,
}

impl Dataset {
    pub fn new(records: Vec<LockerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LockerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
