// Filter catalog
// Sidebar dropdown option sets: sorted distinct values per filterable column

use serde::Serialize;

use crate::entities::Dataset;

#[derive(Debug, Clone, Serialize)]
pub struct FilterCatalog {
    pub locker_type: Vec<String>,
    pub location_type: Vec<String>,
    pub borough: Vec<String>,
    pub locker_size: Vec<String>,
    pub status: Vec<String>,
}

/// The value set of every filterable column is exactly the sorted distinct
/// non-empty values present in the dataset; the wildcard entry is added by
/// the client.
pub fn filter_catalog(dataset: &Dataset) -> FilterCatalog {
    FilterCatalog {
        locker_type: distinct_sorted(dataset, |r| &r.locker_type),
        location_type: distinct_sorted(dataset, |r| &r.location_type),
        borough: distinct_sorted(dataset, |r| &r.borough),
        locker_size: distinct_sorted(dataset, |r| &r.size_text),
        status: distinct_sorted(dataset, |r| &r.status),
    }
}

fn distinct_sorted<F>(dataset: &Dataset, column: F) -> Vec<String>
where
    F: Fn(&crate::entities::LockerRecord) -> &String,
{
    let mut values: Vec<String> = dataset
        .records()
        .iter()
        .map(column)
        .filter(|value| !value.trim().is_empty())
        .cloned()
        .collect();
    values.sort();
    values.dedup();
    values
}
