// Map figure builder
// Projects filtered rows onto a geographic scatter figure for the client

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entities::LockerRecord;
use crate::value_objects::{qualitative_color, RecordId};

/// Visual cap on marker size, whatever the underlying bubble size says.
pub const MARKER_SIZE_MAX: u32 = 28;

/// Partial transparency keeps overlapping markers distinguishable.
pub const MARKER_OPACITY: f64 = 0.45;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub id: RecordId,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub size: u32,
    pub category: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapFigure {
    pub center: MapCenter,
    pub zoom: u32,
    pub marker_opacity: f64,
    pub markers: Vec<MapMarker>,
}

/// One marker per row, colored by location-type category, sized by the
/// derived bubble size (capped). Centered on the arithmetic mean of the
/// filtered coordinates; an empty row set keeps the fallback center so the
/// figure never renders at an undefined location.
pub fn map_figure(rows: &[&LockerRecord], fallback_center: MapCenter, zoom: u32) -> MapFigure {
    let center = if rows.is_empty() {
        fallback_center
    } else {
        let count = rows.len() as f64;
        MapCenter {
            lat: rows.iter().map(|r| r.latitude).sum::<f64>() / count,
            lon: rows.iter().map(|r| r.longitude).sum::<f64>() / count,
        }
    };

    let colors = category_colors(rows);
    let markers = rows
        .iter()
        .map(|record| MapMarker {
            id: record.id,
            address: record.address.clone(),
            lat: record.latitude,
            lon: record.longitude,
            size: record.bubble_size.min(MARKER_SIZE_MAX),
            category: record.location_type.clone(),
            color: colors
                .get(record.location_type.as_str())
                .copied()
                .unwrap_or_else(|| qualitative_color(0))
                .to_string(),
        })
        .collect();

    MapFigure {
        center,
        zoom,
        marker_opacity: MARKER_OPACITY,
        markers,
    }
}

/// Stable assignment: categories are colored in sorted order, so the same
/// category keeps its color across re-renders regardless of row order.
fn category_colors<'a>(rows: &[&'a LockerRecord]) -> BTreeMap<&'a str, &'static str> {
    let mut colors = BTreeMap::new();
    for record in rows {
        colors.entry(record.location_type.as_str()).or_insert("");
    }
    for (index, color) in colors.values_mut().enumerate() {
        *color = qualitative_color(index);
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn empty_rows_fall_back_to_the_fixed_default_center() {
        let fallback = MapCenter { lat: 40.73, lon: -73.98 };
        let figure = map_figure(&[], fallback, 11);
        assert_eq!(figure.center.lat, 40.73);
        assert_eq!(figure.center.lon, -73.98);
        assert!(figure.markers.is_empty());
        assert_eq!(figure.zoom, 11);
    }

    #[test]
    fn center_is_the_mean_of_filtered_coordinates() {
        let mut a = record(0, "10 Main St", "Brooklyn", "Active");
        a.latitude = 40.0;
        a.longitude = -74.0;
        let mut b = record(1, "20 Side Ave", "Queens", "Active");
        b.latitude = 41.0;
        b.longitude = -73.0;
        let figure = map_figure(&[&a, &b], MapCenter { lat: 0.0, lon: 0.0 }, 11);
        assert!((figure.center.lat - 40.5).abs() < 1e-9);
        assert!((figure.center.lon - -73.5).abs() < 1e-9);
    }

    #[test]
    fn marker_size_is_capped() {
        let mut big = record(0, "10 Main St", "Brooklyn", "Active");
        big.bubble_size = 42;
        let figure = map_figure(&[&big], MapCenter { lat: 0.0, lon: 0.0 }, 11);
        assert_eq!(figure.markers[0].size, MARKER_SIZE_MAX);
    }

    #[test]
    fn category_colors_are_stable_across_row_order() {
        let mut a = record(0, "10 Main St", "Brooklyn", "Active");
        a.location_type = "Plaza".to_string();
        let mut b = record(1, "20 Side Ave", "Queens", "Active");
        b.location_type = "Sidewalk".to_string();

        let forward = map_figure(&[&a, &b], MapCenter { lat: 0.0, lon: 0.0 }, 11);
        let reversed = map_figure(&[&b, &a], MapCenter { lat: 0.0, lon: 0.0 }, 11);

        let color_of = |figure: &MapFigure, category: &str| {
            figure
                .markers
                .iter()
                .find(|m| m.category == category)
                .map(|m| m.color.clone())
                .expect("marker present")
        };
        assert_eq!(color_of(&forward, "Plaza"), color_of(&reversed, "Plaza"));
        assert_eq!(color_of(&forward, "Sidewalk"), color_of(&reversed, "Sidewalk"));
        assert_ne!(color_of(&forward, "Plaza"), color_of(&forward, "Sidewalk"));
    }
}
