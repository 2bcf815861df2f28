//! Parcel definition and the built-in reference catalog
//!
//! Defines the Parcel record (a candidate land site with fixed infrastructure
//! attributes), the ParcelCatalog keyed by display name, and the 3 hardcoded
//! Upper Midwest reference parcels.

use crate::error::{Result, ScorerError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A candidate land site.
///
/// Raw factor values are already on a 0-100 scale. All of them are
/// "higher is better" except `historical_contamination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parcel {
    /// Display name, unique within a catalog
    pub name: String,

    /// Human-readable city label (e.g., "Rosemount, MN")
    pub city: String,

    pub lat: f64,
    pub lon: f64,

    // ========================================================================
    // Utilities
    // ========================================================================
    pub power_dist: f64,
    pub fiber_dist: f64,
    pub water_access: f64,

    // ========================================================================
    // Logistics
    // ========================================================================
    pub highway_access: f64,
    pub rail_access: f64,

    // ========================================================================
    // Environment
    // ========================================================================
    pub solar_potential: f64,
    pub wind_potential: f64,

    /// Parcel sits inside a mapped flood zone
    #[serde(rename = "flood_zone_bool", alias = "flood_zone")]
    pub flood_zone: bool,

    /// Lower is better; inverted into "Clean History" during scoring
    pub historical_contamination: f64,

    // ========================================================================
    // Community
    // ========================================================================
    pub council_sentiment: f64,
}

impl Parcel {
    /// Raw factor fields paired with their names, for range validation
    fn factor_fields(&self) -> [(&'static str, f64); 9] {
        [
            ("power_dist", self.power_dist),
            ("fiber_dist", self.fiber_dist),
            ("water_access", self.water_access),
            ("highway_access", self.highway_access),
            ("rail_access", self.rail_access),
            ("solar_potential", self.solar_potential),
            ("wind_potential", self.wind_potential),
            ("historical_contamination", self.historical_contamination),
            ("council_sentiment", self.council_sentiment),
        ]
    }

    /// Check that every raw factor lies in [0, 100] and the coordinates are real
    pub fn validate(&self) -> Result<()> {
        for (field, value) in self.factor_fields() {
            if !(0.0..=100.0).contains(&value) {
                return Err(ScorerError::FactorOutOfRange {
                    parcel: self.name.clone(),
                    field,
                    value,
                });
            }
        }

        if !(-90.0..=90.0).contains(&self.lat) || !(-180.0..=180.0).contains(&self.lon) {
            return Err(ScorerError::InvalidCoordinate {
                parcel: self.name.clone(),
                lat: self.lat,
                lon: self.lon,
            });
        }

        Ok(())
    }
}

/// Ordered, read-only collection of parcels keyed by display name.
///
/// Iteration order is insertion order; ranking ties fall back to it.
#[derive(Debug, Clone, Default)]
pub struct ParcelCatalog {
    parcels: Vec<Parcel>,
    by_name: FxHashMap<String, usize>,
}

impl ParcelCatalog {
    /// Build a catalog, rejecting duplicate names and out-of-range values
    pub fn new(parcels: Vec<Parcel>) -> Result<Self> {
        let mut by_name = FxHashMap::default();

        for (idx, parcel) in parcels.iter().enumerate() {
            parcel.validate()?;
            if by_name.insert(parcel.name.clone(), idx).is_some() {
                return Err(ScorerError::DuplicateParcel(parcel.name.clone()));
            }
        }

        Ok(Self { parcels, by_name })
    }

    /// Load a catalog from a JSON array of parcels
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ScorerError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let parcels: Vec<Parcel> = serde_json::from_str(json)?;
        let catalog = Self::new(parcels)?;
        tracing::info!("Loaded parcel catalog ({} parcels)", catalog.len());
        Ok(catalog)
    }

    pub fn get(&self, name: &str) -> Option<&Parcel> {
        self.by_name.get(name).and_then(|&idx| self.parcels.get(idx))
    }

    /// Like `get`, but reports the missing name as an error
    pub fn require(&self, name: &str) -> Result<&Parcel> {
        self.get(name)
            .ok_or_else(|| ScorerError::UnknownParcel(name.to_string()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parcel> {
        self.parcels.iter()
    }

    pub fn as_slice(&self) -> &[Parcel] {
        &self.parcels
    }

    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }
}

impl<'a> IntoIterator for &'a ParcelCatalog {
    type Item = &'a Parcel;
    type IntoIter = std::slice::Iter<'a, Parcel>;

    fn into_iter(self) -> Self::IntoIter {
        self.parcels.iter()
    }
}

// ============================================================================
// Built-in Reference Parcels
// ============================================================================

/// Rosemount, MN - utility-ready site south of the Twin Cities
pub fn rosemount() -> Parcel {
    Parcel {
        name: "Rosemount – Utility-Ready Parcel".to_string(),
        city: "Rosemount, MN".to_string(),
        lat: 44.739,
        lon: -93.093,
        power_dist: 92.0,
        fiber_dist: 88.0,
        water_access: 85.0,
        highway_access: 78.0,
        rail_access: 60.0,
        solar_potential: 74.0,
        wind_potential: 58.0,
        flood_zone: false,
        historical_contamination: 15.0,
        council_sentiment: 82.0,
    }
}

/// Farmington, MN - emerging industrial site inside a flood zone
pub fn farmington() -> Parcel {
    Parcel {
        name: "Farmington – Emerging Industrial Parcel".to_string(),
        city: "Farmington, MN".to_string(),
        lat: 44.637,
        lon: -93.145,
        power_dist: 80.0,
        fiber_dist: 75.0,
        water_access: 72.0,
        highway_access: 82.0,
        rail_access: 68.0,
        solar_potential: 79.0,
        wind_potential: 65.0,
        flood_zone: true,
        historical_contamination: 28.0,
        council_sentiment: 70.0,
    }
}

/// Becker, MN - legacy generation site with strong rail and power
pub fn becker() -> Parcel {
    Parcel {
        name: "Becker – Legacy Generation Parcel".to_string(),
        city: "Becker, MN".to_string(),
        lat: 45.392,
        lon: -93.871,
        power_dist: 96.0,
        fiber_dist: 70.0,
        water_access: 90.0,
        highway_access: 88.0,
        rail_access: 92.0,
        solar_potential: 69.0,
        wind_potential: 83.0,
        flood_zone: false,
        historical_contamination: 40.0,
        council_sentiment: 76.0,
    }
}

/// The built-in Upper Midwest catalog (Rosemount, Farmington, Becker)
pub fn upper_midwest() -> ParcelCatalog {
    let parcels = vec![rosemount(), farmington(), becker()];
    let by_name = parcels
        .iter()
        .enumerate()
        .map(|(idx, p)| (p.name.clone(), idx))
        .collect();
    ParcelCatalog { parcels, by_name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = upper_midwest();
        assert_eq!(catalog.len(), 3);
        for parcel in &catalog {
            assert!(parcel.validate().is_ok(), "{} should validate", parcel.name);
        }
        assert!(catalog.get("Becker – Legacy Generation Parcel").is_some());
        assert!(catalog.get("Nowhere").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let names: Vec<_> = upper_midwest().iter().map(|p| p.city.clone()).collect();
        assert_eq!(names, vec!["Rosemount, MN", "Farmington, MN", "Becker, MN"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ParcelCatalog::new(vec![rosemount(), rosemount()]).unwrap_err();
        assert!(matches!(err, ScorerError::DuplicateParcel(_)));
    }

    #[test]
    fn test_out_of_range_factor_rejected() {
        let mut parcel = becker();
        parcel.rail_access = 120.0;
        let err = ParcelCatalog::new(vec![parcel]).unwrap_err();
        match err {
            ScorerError::FactorOutOfRange { field, value, .. } => {
                assert_eq!(field, "rail_access");
                assert_eq!(value, 120.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_coordinate_rejected() {
        let mut parcel = rosemount();
        parcel.lat = 95.0;
        assert!(matches!(
            parcel.validate(),
            Err(ScorerError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{
            "name": "Test Site",
            "city": "Anoka, MN",
            "lat": 45.2,
            "lon": -93.4,
            "power_dist": 50,
            "fiber_dist": 40,
            "water_access": 30,
            "highway_access": 20,
            "rail_access": 10,
            "solar_potential": 60,
            "wind_potential": 70,
            "flood_zone_bool": true,
            "historical_contamination": 5,
            "council_sentiment": 90
        }]"#;

        let catalog = ParcelCatalog::from_json(json).unwrap();
        let parcel = catalog.require("Test Site").unwrap();
        assert!(parcel.flood_zone);
        assert_eq!(parcel.council_sentiment, 90.0);
        assert!(matches!(
            catalog.require("Other Site"),
            Err(ScorerError::UnknownParcel(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            ParcelCatalog::from_json("{not json"),
            Err(ScorerError::CatalogParse(_))
        ));
    }
}
