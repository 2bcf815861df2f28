//! Map marker descriptors
//!
//! Turns a ranking into color-coded circle markers for a map view. This is
//! plain data for whatever front end draws the map; nothing is rendered here.

use crate::ranking::RankedParcel;
use serde::Serialize;

/// Twin Cities anchor for the default view
pub const MAP_CENTER: (f64, f64) = (44.9778, -93.2650);
pub const MAP_ZOOM: u8 = 8;

const MARKER_RADIUS: u8 = 9;
const MARKER_FILL_OPACITY: f64 = 0.9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: u8,
    pub fill_opacity: f64,
    pub color: &'static str,
    pub popup: MarkerPopup,
}

/// Fields shown when a marker is clicked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPopup {
    pub name: String,
    pub city: String,
    /// Score with one decimal, e.g. "83.4"
    pub score: String,
    pub bucket: &'static str,
}

impl From<&RankedParcel> for MapMarker {
    fn from(entry: &RankedParcel) -> Self {
        Self {
            lat: entry.lat,
            lon: entry.lon,
            radius: MARKER_RADIUS,
            fill_opacity: MARKER_FILL_OPACITY,
            color: entry.bucket.marker_color(),
            popup: MarkerPopup {
                name: entry.name.clone(),
                city: entry.city.clone(),
                score: format!("{:.1}", entry.score),
                bucket: entry.bucket.display_text(),
            },
        }
    }
}

/// Default map view with one marker per ranked parcel
pub fn build_map_view(ranked: &[RankedParcel]) -> MapView {
    MapView {
        center_lat: MAP_CENTER.0,
        center_lon: MAP_CENTER.1,
        zoom: MAP_ZOOM,
        markers: ranked.iter().map(MapMarker::from).collect(),
    }
}
