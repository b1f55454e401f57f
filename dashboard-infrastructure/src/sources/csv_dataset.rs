// CSV dataset source
// Implements the domain's DatasetSource port over the delimited export

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use csv::StringRecord;
use thiserror::Error;
use tracing::{info, warn};

use dashboard_domain::{
    marker_size_for, parse_timestamp, Dataset, DatasetSource, EventKind, LockerRecord, RecordId,
};

/// Exact-match column headers the export must carry. "Locker Name" is the
/// one optional column.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "Type",
    "Location Type",
    "Borough",
    "Locker Size",
    "Status",
    "Latitude",
    "longitude",
    "Address",
    "Delivery Date",
    "Receive Date",
    "Withdraw Date",
    "Expire Date",
];

const LOCKER_NAME_COLUMN: &str = "Locker Name";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Default)]
pub struct CsvDatasetSource;

impl CsvDatasetSource {
    pub fn new() -> Self {
        Self
    }

    /// Parses the full table. Header problems are fatal; per-row defects
    /// degrade (bad coordinates skip the row, bad timestamps drop the
    /// event) so one dirty row never takes the dashboard down.
    pub fn parse_reader<R: Read>(&self, reader: R) -> Result<Dataset, DatasetError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let columns: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name, index))
            .collect();
        for column in REQUIRED_COLUMNS {
            if !columns.contains_key(column) {
                return Err(DatasetError::MissingColumn(column.to_string()));
            }
        }

        let field = |row: &StringRecord, name: &str| -> String {
            columns
                .get(name)
                .and_then(|&index| row.get(index))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (index, row) in csv_reader.records().enumerate() {
            let row = row?;
            let latitude = field(&row, "Latitude").parse::<f64>();
            let longitude = field(&row, "longitude").parse::<f64>();
            let (Ok(latitude), Ok(longitude)) = (latitude, longitude) else {
                warn!(row = index + 1, "skipping row with unparseable coordinates");
                skipped += 1;
                continue;
            };

            let locker_name = Some(field(&row, LOCKER_NAME_COLUMN)).filter(|name| !name.is_empty());
            let size_text = field(&row, "Locker Size");
            let bubble_size = marker_size_for(&size_text);
            records.push(LockerRecord {
                id: RecordId(records.len() as u32),
                address: field(&row, "Address"),
                locker_name,
                latitude,
                longitude,
                locker_type: field(&row, "Type"),
                location_type: field(&row, "Location Type"),
                borough: field(&row, "Borough"),
                size_text,
                status: field(&row, "Status"),
                bubble_size,
                delivery_at: parse_timestamp(&field(&row, EventKind::Delivery.column())),
                receive_at: parse_timestamp(&field(&row, EventKind::Receive.column())),
                withdraw_at: parse_timestamp(&field(&row, EventKind::Withdraw.column())),
                expire_at: parse_timestamp(&field(&row, EventKind::Expire.column())),
            });
        }

        info!(rows = records.len(), skipped, "dataset loaded");
        Ok(Dataset::new(records))
    }
}

#[async_trait]
impl DatasetSource for CsvDatasetSource {
    async fn load(&self, path: &Path) -> anyhow::Result<Dataset> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("reading dataset file {}", path.display()))?;
        let dataset = self.parse_reader(bytes.as_slice())?;
        Ok(dataset)
    }
}
