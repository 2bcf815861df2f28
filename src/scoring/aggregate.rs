//! Weighted Aggregator
//!
//! Combines normalized factor scores with user weights into a single 0-100
//! suitability score. The maximum achievable score is always 100: each
//! factor's influence is its weight as a fraction of the total weight assigned.

use super::factors::{normalize_factors, Factor, MAX_FACTOR_SCORE};
use crate::parcel::Parcel;
use crate::weights::WeightSet;
use serde::Serialize;

/// Flood-risk aversion at or above which flood-zone parcels are vetoed
pub const FLOOD_GATE_THRESHOLD: u8 = 7;

/// Weighted contribution of one factor (normalized value × weight)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorContribution {
    pub factor: Factor,
    pub label: &'static str,
    pub contribution: f64,
}

/// Score result for one parcel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Final suitability score in [0, 100]
    pub score: f64,

    /// Contributions of positively weighted factors, in factor order
    pub contributions: Vec<FactorContribution>,

    /// True when the flood zero-out gate forced the score to 0
    pub gated: bool,
}

impl ScoreResult {
    fn zero(gated: bool) -> Self {
        Self {
            score: 0.0,
            contributions: Vec::new(),
            gated,
        }
    }

    pub fn contribution(&self, factor: Factor) -> Option<f64> {
        self.contributions
            .iter()
            .find(|c| c.factor == factor)
            .map(|c| c.contribution)
    }
}

/// True when a flood-averse user is looking at a flood-zone parcel
pub fn is_flood_vetoed(parcel: &Parcel, flood_risk_weight: u8) -> bool {
    flood_risk_weight >= FLOOD_GATE_THRESHOLD && parcel.flood_zone
}

/// Compute the global suitability score (0-100) for one parcel.
///
/// `flood_risk_weight` drives the zero-out gate and the flood-exposure
/// penalty; callers normally pass `weights.flood_risk`.
pub fn compute_parcel_score(
    parcel: &Parcel,
    weights: &WeightSet,
    flood_risk_weight: u8,
) -> ScoreResult {
    // Zero-out gate: a hard veto, not a soft penalty
    if is_flood_vetoed(parcel, flood_risk_weight) {
        tracing::debug!(
            "Zero-out gate fired for '{}' (flood risk aversion {})",
            parcel.name,
            flood_risk_weight
        );
        return ScoreResult::zero(true);
    }

    let factor_scores = normalize_factors(parcel, flood_risk_weight);

    let mut weighted_sum = 0.0;
    let mut total_possible_weight = 0.0;
    let mut contributions = Vec::with_capacity(Factor::ALL.len());

    for (factor, value) in factor_scores.iter() {
        let weight = weights.weight(factor.weight_key());
        if weight <= 0.0 {
            continue;
        }
        let contribution = value * weight;
        weighted_sum += contribution;
        total_possible_weight += weight * MAX_FACTOR_SCORE;
        contributions.push(FactorContribution {
            factor,
            label: factor.label(),
            contribution,
        });
    }

    if total_possible_weight == 0.0 {
        return ScoreResult::zero(false);
    }

    ScoreResult {
        score: 100.0 * weighted_sum / total_possible_weight,
        contributions,
        gated: false,
    }
}

/// Score a parcel using the set's own flood-risk weight for the gate
pub fn score_parcel(parcel: &Parcel, weights: &WeightSet) -> ScoreResult {
    compute_parcel_score(parcel, weights, weights.flood_risk_aversion())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parcel::{becker, farmington, rosemount};
    use crate::weights::{Persona, WeightKey};
    use approx::assert_relative_eq;

    #[test]
    fn test_single_factor_scores_raw_value() {
        let weights = WeightSet::zeroed().with(WeightKey::Power, 10);
        let result = score_parcel(&rosemount(), &weights);
        // 100 × (92 × 10) / (10 × 100)
        assert_relative_eq!(result.score, 92.0, epsilon = 1e-9);
        assert_eq!(result.contributions.len(), 1);
        assert_relative_eq!(result.contribution(Factor::Power).unwrap(), 920.0);
    }

    #[test]
    fn test_single_factor_at_max_scores_100() {
        let mut parcel = rosemount();
        parcel.power_dist = 100.0;
        let weights = WeightSet::zeroed().with(WeightKey::Power, 10);
        assert_relative_eq!(score_parcel(&parcel, &weights).score, 100.0);

        // Weight magnitude does not matter when only one factor is weighted
        let weights = WeightSet::zeroed().with(WeightKey::Power, 1);
        assert_relative_eq!(score_parcel(&parcel, &weights).score, 100.0);
    }

    #[test]
    fn test_sentiment_weight_covers_two_factors() {
        let weights = WeightSet::zeroed().with(WeightKey::Sentiment, 5);
        let result = score_parcel(&rosemount(), &weights);
        // Clean History 85 and Council Sentiment 82, equally weighted
        assert_relative_eq!(result.score, (85.0 + 82.0) / 2.0, epsilon = 1e-9);
        assert_eq!(result.contributions.len(), 2);
        assert_relative_eq!(result.contribution(Factor::CleanHistory).unwrap(), 425.0);
        assert_relative_eq!(result.contribution(Factor::CouncilSentiment).unwrap(), 410.0);
    }

    #[test]
    fn test_flood_gate_fires_at_threshold() {
        let weights = Persona::Industrial.default_weights();
        assert_eq!(weights.flood_risk, 7);
        let result = score_parcel(&farmington(), &weights);
        assert_eq!(result.score, 0.0);
        assert!(result.contributions.is_empty());
        assert!(result.gated);
    }

    #[test]
    fn test_flood_penalty_below_threshold() {
        let weights = WeightSet::zeroed().with(WeightKey::FloodRisk, 6);
        let result = score_parcel(&farmington(), &weights);
        assert!(!result.gated);
        assert_relative_eq!(result.score, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_explicit_gate_weight_overrides_set() {
        // The gate follows the explicit argument, not the set's own value
        let weights = WeightSet::zeroed().with(WeightKey::Power, 5);
        let result = compute_parcel_score(&farmington(), &weights, 8);
        assert!(result.gated);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        for parcel in [rosemount(), farmington(), becker()] {
            let result = score_parcel(&parcel, &WeightSet::zeroed());
            assert_eq!(result.score, 0.0);
            assert!(result.contributions.is_empty());
            assert!(!result.gated);
        }
    }

    #[test]
    fn test_data_center_persona_scores() {
        let weights = Persona::DataCenter.default_weights();
        let result = score_parcel(&rosemount(), &weights);
        // power 92×10 + fiber 88×9 + water 85×5 + highway 78×4 + rail 60×2
        // + solar 74×5 + wind 58×2 + flood 100×9 + clean 85×7 + sentiment 82×7
        let weighted_sum = 920.0 + 792.0 + 425.0 + 312.0 + 120.0 + 370.0 + 116.0
            + 900.0 + 595.0 + 574.0;
        let total = (10.0 + 9.0 + 5.0 + 4.0 + 2.0 + 5.0 + 2.0 + 9.0 + 7.0 + 7.0) * 100.0;
        assert_relative_eq!(result.score, 100.0 * weighted_sum / total, epsilon = 1e-9);
        assert_eq!(result.contributions.len(), 10);
    }
}
