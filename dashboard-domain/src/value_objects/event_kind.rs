// Lifecycle event kind value object

use serde::{Deserialize, Serialize};

use crate::value_objects::palette::qualitative_color;

/// The four dated lifecycle events a locker reservation can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    Delivery,
    Receive,
    Withdraw,
    Expire,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Delivery,
        EventKind::Receive,
        EventKind::Withdraw,
        EventKind::Expire,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Delivery => "Delivery",
            EventKind::Receive => "Receive",
            EventKind::Withdraw => "Withdraw",
            EventKind::Expire => "Expire",
        }
    }

    /// Column header carrying this event's timestamp in the source data.
    pub fn column(&self) -> &'static str {
        match self {
            EventKind::Delivery => "Delivery Date",
            EventKind::Receive => "Receive Date",
            EventKind::Withdraw => "Withdraw Date",
            EventKind::Expire => "Expire Date",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EventKind::Delivery => qualitative_color(0),
            EventKind::Receive => qualitative_color(1),
            EventKind::Withdraw => qualitative_color(2),
            EventKind::Expire => qualitative_color(3),
        }
    }
}
