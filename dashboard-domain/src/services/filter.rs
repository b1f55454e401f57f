// Filter engine
// Pure AND-of-equality filtering over the loaded dataset

use serde::Deserialize;

use crate::entities::{Dataset, LockerRecord};

/// Dropdown value meaning "no constraint on this column".
pub const WILDCARD: &str = "All";

/// One optional selection per filterable column. A missing value, an empty
/// string, or the literal wildcard all impose no constraint, so clients can
/// submit their dropdown state verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterSelection {
    #[serde(rename = "type")]
    pub locker_type: Option<String>,
    pub location_type: Option<String>,
    pub borough: Option<String>,
    pub locker_size: Option<String>,
    pub status: Option<String>,
}

impl FilterSelection {
    pub fn matches(&self, record: &LockerRecord) -> bool {
        accepts(&self.locker_type, &record.locker_type)
            && accepts(&self.location_type, &record.location_type)
            && accepts(&self.borough, &record.borough)
            && accepts(&self.locker_size, &record.size_text)
            && accepts(&self.status, &record.status)
    }
}

fn accepts(selection: &Option<String>, value: &str) -> bool {
    match selection {
        Some(selected) if !selected.is_empty() && selected != WILDCARD => selected == value,
        _ => true,
    }
}

/// Rows matching every non-wildcard selection. Exact string equality per
/// column, combined with logical AND. The result may be empty; callers
/// render the empty case rather than treat it as an error.
pub fn filter_records<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> Vec<&'a LockerRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| selection.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{dataset, record};

    #[test]
    fn all_wildcards_return_the_full_dataset() {
        let data = dataset(vec![
            record(0, "10 Main St", "Brooklyn", "Active"),
            record(1, "20 Side Ave", "Queens", "Inactive"),
        ]);
        let rows = filter_records(&data, &FilterSelection::default());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn explicit_wildcard_and_empty_string_impose_no_constraint() {
        let data = dataset(vec![record(0, "10 Main St", "Brooklyn", "Active")]);
        let selection = FilterSelection {
            borough: Some(WILDCARD.to_string()),
            status: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_records(&data, &selection).len(), 1);
    }

    #[test]
    fn selections_combine_with_logical_and() {
        let data = dataset(vec![
            record(0, "10 Main St", "Brooklyn", "Active"),
            record(1, "20 Side Ave", "Brooklyn", "Inactive"),
            record(2, "30 Hill Rd", "Queens", "Active"),
        ]);
        let selection = FilterSelection {
            borough: Some("Brooklyn".to_string()),
            status: Some("Active".to_string()),
            ..Default::default()
        };
        let rows = filter_records(&data, &selection);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].address, "10 Main St");
    }

    #[test]
    fn equality_is_exact_not_substring() {
        let data = dataset(vec![record(0, "10 Main St", "Brooklyn", "Active")]);
        let selection = FilterSelection {
            borough: Some("Brook".to_string()),
            ..Default::default()
        };
        assert!(filter_records(&data, &selection).is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let data = dataset(vec![
            record(0, "10 Main St", "Brooklyn", "Active"),
            record(1, "20 Side Ave", "Queens", "Active"),
        ]);
        let selection = FilterSelection {
            borough: Some("Queens".to_string()),
            ..Default::default()
        };
        let once = filter_records(&data, &selection);
        let refiltered = Dataset::new(once.iter().map(|r| (*r).clone()).collect());
        let twice = filter_records(&refiltered, &selection);
        assert_eq!(once.len(), twice.len());
        assert_eq!(once[0].address, twice[0].address);
    }
}
