//! Weight keys, weight sets and persona presets
//!
//! A WeightSet holds the nine user-adjustable importance weights (0-10).
//! Personas are immutable default WeightSets for institutional buyer types.
//!
//! Two keys are overloaded on purpose:
//! - `flood_risk` drives both the flood-exposure penalty and the zero-out gate
//! - `sentiment` weights both Council Sentiment and Clean History

use crate::error::{Result, ScorerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest value any single weight may take
pub const MAX_WEIGHT: u8 = 10;

/// The nine weight keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightKey {
    Power,
    Fiber,
    Water,
    Highway,
    Rail,
    Solar,
    Wind,
    FloodRisk,
    Sentiment,
}

impl WeightKey {
    pub const ALL: [WeightKey; 9] = [
        WeightKey::Power,
        WeightKey::Fiber,
        WeightKey::Water,
        WeightKey::Highway,
        WeightKey::Rail,
        WeightKey::Solar,
        WeightKey::Wind,
        WeightKey::FloodRisk,
        WeightKey::Sentiment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightKey::Power => "power",
            WeightKey::Fiber => "fiber",
            WeightKey::Water => "water",
            WeightKey::Highway => "highway",
            WeightKey::Rail => "rail",
            WeightKey::Solar => "solar",
            WeightKey::Wind => "wind",
            WeightKey::FloodRisk => "flood_risk",
            WeightKey::Sentiment => "sentiment",
        }
    }

    /// Control label shown next to the weight input
    pub fn display_text(&self) -> &'static str {
        match self {
            WeightKey::Power => "Power",
            WeightKey::Fiber => "Fiber",
            WeightKey::Water => "Water",
            WeightKey::Highway => "Highway",
            WeightKey::Rail => "Rail",
            WeightKey::Solar => "Solar GHI",
            WeightKey::Wind => "Wind",
            WeightKey::FloodRisk => "Flood Risk (aversion)",
            WeightKey::Sentiment => "Public / Political Friction (weight)",
        }
    }

    /// Control group the weight belongs to
    pub fn group(&self) -> &'static str {
        match self {
            WeightKey::Power | WeightKey::Fiber | WeightKey::Water => "Utilities",
            WeightKey::Highway | WeightKey::Rail => "Logistics",
            WeightKey::Solar | WeightKey::Wind | WeightKey::FloodRisk => "Environment",
            WeightKey::Sentiment => "Sentiment",
        }
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightKey {
    type Err = ScorerError;

    fn from_str(s: &str) -> Result<Self> {
        WeightKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ScorerError::UnknownWeightKey(s.to_string()))
    }
}

/// The nine user weights, each in [0, 10].
///
/// Fields are public for struct-literal construction; `set` is the checked
/// path for untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightSet {
    pub power: u8,
    pub fiber: u8,
    pub water: u8,
    pub highway: u8,
    pub rail: u8,
    pub solar: u8,
    pub wind: u8,
    pub flood_risk: u8,
    pub sentiment: u8,
}

impl WeightSet {
    /// All weights zero
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// Every weight set to the same value (clamped to the maximum)
    pub fn uniform(value: u8) -> Self {
        let mut weights = Self::default();
        for key in WeightKey::ALL {
            *weights.slot_mut(key) = value.min(MAX_WEIGHT);
        }
        weights
    }

    pub fn get(&self, key: WeightKey) -> u8 {
        match key {
            WeightKey::Power => self.power,
            WeightKey::Fiber => self.fiber,
            WeightKey::Water => self.water,
            WeightKey::Highway => self.highway,
            WeightKey::Rail => self.rail,
            WeightKey::Solar => self.solar,
            WeightKey::Wind => self.wind,
            WeightKey::FloodRisk => self.flood_risk,
            WeightKey::Sentiment => self.sentiment,
        }
    }

    fn slot_mut(&mut self, key: WeightKey) -> &mut u8 {
        match key {
            WeightKey::Power => &mut self.power,
            WeightKey::Fiber => &mut self.fiber,
            WeightKey::Water => &mut self.water,
            WeightKey::Highway => &mut self.highway,
            WeightKey::Rail => &mut self.rail,
            WeightKey::Solar => &mut self.solar,
            WeightKey::Wind => &mut self.wind,
            WeightKey::FloodRisk => &mut self.flood_risk,
            WeightKey::Sentiment => &mut self.sentiment,
        }
    }

    /// Set one weight, rejecting values outside [0, 10]
    pub fn set(&mut self, key: WeightKey, value: i64) -> Result<()> {
        let checked = u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_WEIGHT)
            .ok_or_else(|| ScorerError::WeightOutOfRange {
                key: key.as_str().to_string(),
                value,
            })?;
        *self.slot_mut(key) = checked;
        Ok(())
    }

    /// Set one weight addressed by its string key (e.g. from a JSON payload)
    pub fn set_by_name(&mut self, key: &str, value: i64) -> Result<()> {
        self.set(key.parse()?, value)
    }

    /// Builder-style variant of `set` for already-trusted values
    pub fn with(mut self, key: WeightKey, value: u8) -> Self {
        *self.slot_mut(key) = value.min(MAX_WEIGHT);
        self
    }

    /// Weight as a float, the form the aggregator works in
    pub fn weight(&self, key: WeightKey) -> f64 {
        f64::from(self.get(key))
    }

    /// Flood-risk aversion, which also drives the zero-out gate
    pub fn flood_risk_aversion(&self) -> u8 {
        self.flood_risk
    }

    /// Check every weight lies in [0, 10] (deserialized sets skip `set`)
    pub fn validate(&self) -> Result<()> {
        for key in WeightKey::ALL {
            let value = self.get(key);
            if value > MAX_WEIGHT {
                return Err(ScorerError::WeightOutOfRange {
                    key: key.as_str().to_string(),
                    value: i64::from(value),
                });
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (WeightKey, u8)> + '_ {
        WeightKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

// ============================================================================
// Personas
// ============================================================================

/// Institutional buyer presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    DataCenter,
    Industrial,
    Solar,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::DataCenter, Persona::Industrial, Persona::Solar];

    pub fn display_text(&self) -> &'static str {
        match self {
            Persona::DataCenter => "Data Center",
            Persona::Industrial => "Industrial",
            Persona::Solar => "Solar",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::DataCenter => "data_center",
            Persona::Industrial => "industrial",
            Persona::Solar => "solar",
        }
    }

    /// Institutional default weights for this persona
    pub fn default_weights(&self) -> WeightSet {
        match self {
            Persona::DataCenter => WeightSet {
                power: 10,
                fiber: 9,
                water: 5,
                highway: 4,
                rail: 2,
                solar: 5,
                wind: 2,
                flood_risk: 9,
                sentiment: 7,
            },
            Persona::Industrial => WeightSet {
                power: 8,
                fiber: 6,
                water: 7,
                highway: 9,
                rail: 8,
                solar: 3,
                wind: 3,
                flood_risk: 7,
                sentiment: 6,
            },
            Persona::Solar => WeightSet {
                power: 4,
                fiber: 3,
                water: 4,
                highway: 5,
                rail: 3,
                solar: 10,
                wind: 7,
                flood_risk: 10,
                sentiment: 6,
            },
        }
    }
}

impl Default for Persona {
    fn default() -> Self {
        Persona::DataCenter
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

impl FromStr for Persona {
    type Err = ScorerError;

    /// Accepts display names ("Data Center") and snake/kebab keys ("data_center")
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| ScorerError::UnknownPersona(s.to_string()))
    }
}
