//! Bucketizer: score → ordinal suitability tier
//!
//! Thresholds are inclusive on the lower bound, so exactly 75 is High and
//! exactly 50 is Medium.

use serde::Serialize;

pub const HIGH_THRESHOLD: f64 = 75.0;
pub const MEDIUM_THRESHOLD: f64 = 50.0;

/// Suitability tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SuitabilityBucket {
    Low,
    Medium,
    High,
}

impl SuitabilityBucket {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            SuitabilityBucket::High
        } else if score >= MEDIUM_THRESHOLD {
            SuitabilityBucket::Medium
        } else {
            SuitabilityBucket::Low
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            SuitabilityBucket::High => "High",
            SuitabilityBucket::Medium => "Medium",
            SuitabilityBucket::Low => "Low",
        }
    }

    /// Pill label used in the ranking list
    pub fn label(&self) -> &'static str {
        match self {
            SuitabilityBucket::High => "High Suitability",
            SuitabilityBucket::Medium => "Medium Suitability",
            SuitabilityBucket::Low => "Low Suitability",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SuitabilityBucket::High => "pill-high",
            SuitabilityBucket::Medium => "pill-medium",
            SuitabilityBucket::Low => "pill-low",
        }
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            SuitabilityBucket::High => "lime",
            SuitabilityBucket::Medium => "orange",
            SuitabilityBucket::Low => "red",
        }
    }
}

pub fn score_to_bucket(score: f64) -> SuitabilityBucket {
    SuitabilityBucket::from_score(score)
}

/// Display class for a score, same thresholds as `score_to_bucket`
pub fn bucket_to_class(score: f64) -> &'static str {
    SuitabilityBucket::from_score(score).css_class()
}
