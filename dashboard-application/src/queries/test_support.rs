// Fixture state for the query tests

use std::sync::Arc;

use dashboard_domain::{Dataset, LockerRecord, RecordId, RuntimeConfig};

use crate::{AppState, Metrics};

fn record(id: u32, address: &str, borough: &str) -> LockerRecord {
    LockerRecord {
        id: RecordId(id),
        address: address.to_string(),
        locker_name: None,
        latitude: 40.70 + f64::from(id) * 0.01,
        longitude: -73.90 - f64::from(id) * 0.01,
        locker_type: "Package".to_string(),
        location_type: "Sidewalk".to_string(),
        borough: borough.to_string(),
        size_text: "M".to_string(),
        status: "Active".to_string(),
        bubble_size: 22,
        delivery_at: None,
        receive_at: None,
        withdraw_at: None,
        expire_at: None,
    }
}

pub fn app_state() -> AppState {
    let mut delivered = record(0, "10 Main St", "Brooklyn");
    delivered.delivery_at = date(2024, 3, 1);
    delivered.receive_at = date(2024, 3, 5);

    let dataset = Dataset::new(vec![
        delivered,
        record(1, "20 Side Ave", "Brooklyn"),
        record(2, "30 Hill Rd", "Queens"),
    ]);

    AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:3345".to_string(),
            dataset_path: "./lockers.csv".to_string(),
            map_zoom: 11,
            default_center_lat: 40.73,
            default_center_lon: -73.98,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        },
        dataset: Arc::new(dataset),
        metrics: Arc::new(Metrics::default()),
    }
}

fn date(year: i32, month: u32, day: u32) -> Option<chrono::NaiveDateTime> {
    chrono::NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)
}
