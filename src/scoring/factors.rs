//! Factor Normalizer
//!
//! Converts a parcel's raw stored attributes into ten comparable 0-100
//! "goodness" scores. Contamination is inverted into Clean History and the
//! flood-exposure score is penalised by the user's flood-risk aversion.

use crate::parcel::Parcel;
use crate::weights::WeightKey;
use serde::{Deserialize, Serialize};

/// Highest value any single normalized factor can take
pub const MAX_FACTOR_SCORE: f64 = 100.0;

/// Points of flood-exposure score lost per unit of flood-risk aversion
const FLOOD_PENALTY_PER_WEIGHT: f64 = 10.0;

/// The ten scored factors, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Power,
    Fiber,
    Water,
    Highway,
    Rail,
    SolarGhi,
    Wind,
    LowFloodExposure,
    CleanHistory,
    CouncilSentiment,
}

impl Factor {
    pub const ALL: [Factor; 10] = [
        Factor::Power,
        Factor::Fiber,
        Factor::Water,
        Factor::Highway,
        Factor::Rail,
        Factor::SolarGhi,
        Factor::Wind,
        Factor::LowFloodExposure,
        Factor::CleanHistory,
        Factor::CouncilSentiment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Factor::Power => "Power",
            Factor::Fiber => "Fiber",
            Factor::Water => "Water",
            Factor::Highway => "Highway",
            Factor::Rail => "Rail",
            Factor::SolarGhi => "Solar GHI",
            Factor::Wind => "Wind",
            Factor::LowFloodExposure => "Low Flood Exposure",
            Factor::CleanHistory => "Clean History",
            Factor::CouncilSentiment => "Council Sentiment",
        }
    }

    /// Weight key that scales this factor.
    ///
    /// Clean History shares `sentiment` with Council Sentiment: contamination
    /// counts toward the public/political friction bucket.
    pub fn weight_key(&self) -> WeightKey {
        match self {
            Factor::Power => WeightKey::Power,
            Factor::Fiber => WeightKey::Fiber,
            Factor::Water => WeightKey::Water,
            Factor::Highway => WeightKey::Highway,
            Factor::Rail => WeightKey::Rail,
            Factor::SolarGhi => WeightKey::Solar,
            Factor::Wind => WeightKey::Wind,
            Factor::LowFloodExposure => WeightKey::FloodRisk,
            Factor::CleanHistory | Factor::CouncilSentiment => WeightKey::Sentiment,
        }
    }
}

/// Normalized 0-100 scores for all ten factors of one parcel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScores {
    values: [f64; 10],
}

impl FactorScores {
    pub fn get(&self, factor: Factor) -> f64 {
        // Factor::ALL is in declaration order, so the discriminant is the index
        self.values[factor as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// Low Flood Exposure score for a parcel under a given aversion weight
pub fn flood_exposure_score(in_flood_zone: bool, flood_risk_weight: u8) -> f64 {
    if !in_flood_zone {
        return MAX_FACTOR_SCORE;
    }
    (MAX_FACTOR_SCORE - FLOOD_PENALTY_PER_WEIGHT * f64::from(flood_risk_weight)).max(0.0)
}

/// Produce the ten normalized factor scores for a parcel
pub fn normalize_factors(parcel: &Parcel, flood_risk_weight: u8) -> FactorScores {
    FactorScores {
        values: [
            parcel.power_dist,
            parcel.fiber_dist,
            parcel.water_access,
            parcel.highway_access,
            parcel.rail_access,
            parcel.solar_potential,
            parcel.wind_potential,
            flood_exposure_score(parcel.flood_zone, flood_risk_weight),
            MAX_FACTOR_SCORE - parcel.historical_contamination,
            parcel.council_sentiment,
        ],
    }
}
