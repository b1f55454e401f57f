// Shared fixture builders for the domain tests

use chrono::{NaiveDate, NaiveDateTime};

use crate::entities::{Dataset, LockerRecord};
use crate::value_objects::RecordId;

pub fn record(id: u32, address: &str, borough: &str, status: &str) -> LockerRecord {
    LockerRecord {
        id: RecordId(id),
        address: address.to_string(),
        locker_name: None,
        latitude: 40.70,
        longitude: -73.90,
        locker_type: "Package".to_string(),
        location_type: "Sidewalk".to_string(),
        borough: borough.to_string(),
        size_text: "M".to_string(),
        status: status.to_string(),
        bubble_size: 22,
        delivery_at: None,
        receive_at: None,
        withdraw_at: None,
        expire_at: None,
    }
}

pub fn dataset(records: Vec<LockerRecord>) -> Dataset {
    Dataset::new(records)
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("valid date")
        .and_hms_opt(0, 0, 0)
        .expect("valid time")
}
