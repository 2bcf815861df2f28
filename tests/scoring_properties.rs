// Scoring property tests over the built-in catalog
//
// Run with: cargo test --test scoring_properties

use approx::assert_relative_eq;
use parcel_scorer_rust::parcel::{becker, farmington, rosemount};
use parcel_scorer_rust::scoring::{compute_parcel_score, score_parcel, FLOOD_GATE_THRESHOLD};
use parcel_scorer_rust::{
    score_to_bucket, simulate_sentiment_score, upper_midwest, Persona, SuitabilityBucket, WeightKey,
    WeightSet,
};

/// Deterministic spread of weight sets: personas, uniform sets, single-key
/// sets and a pseudo-random sample (fixed-seed LCG)
fn weight_sweep() -> Vec<WeightSet> {
    let mut sets: Vec<WeightSet> = Persona::ALL.iter().map(|p| p.default_weights()).collect();

    for value in 0..=10 {
        sets.push(WeightSet::uniform(value));
        for key in WeightKey::ALL {
            sets.push(WeightSet::zeroed().with(key, value));
        }
    }

    let mut state: u64 = 0x5eed_1234;
    for _ in 0..500 {
        let mut weights = WeightSet::zeroed();
        for key in WeightKey::ALL {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            weights = weights.with(key, ((state >> 33) % 11) as u8);
        }
        sets.push(weights);
    }

    sets
}

#[test]
fn non_flood_parcels_score_within_bounds() {
    for parcel in [rosemount(), becker()] {
        for weights in weight_sweep() {
            let result = score_parcel(&parcel, &weights);
            assert!(
                (0.0..=100.0).contains(&result.score),
                "{} scored {} under {:?}",
                parcel.name,
                result.score,
                weights
            );
            assert!(!result.gated);
        }
    }
}

#[test]
fn flood_parcel_scores_within_bounds_below_gate() {
    let parcel = farmington();
    for weights in weight_sweep() {
        let result = score_parcel(&parcel, &weights);
        assert!((0.0..=100.0).contains(&result.score));
    }
}

#[test]
fn flood_gate_vetoes_regardless_of_other_weights() {
    let parcel = farmington();
    for weights in weight_sweep() {
        for aversion in FLOOD_GATE_THRESHOLD..=10 {
            let weights = weights.with(WeightKey::FloodRisk, aversion);
            let result = compute_parcel_score(&parcel, &weights, aversion);
            assert_eq!(result.score, 0.0);
            assert!(result.contributions.is_empty());
            assert!(result.gated);
        }
    }
}

#[test]
fn farmington_vetoed_at_aversion_seven() {
    let weights = WeightSet::uniform(10).with(WeightKey::FloodRisk, 7);
    assert_eq!(score_parcel(&farmington(), &weights).score, 0.0);

    // One notch lower the parcel is scored normally
    let weights = weights.with(WeightKey::FloodRisk, 6);
    assert!(score_parcel(&farmington(), &weights).score > 0.0);
}

#[test]
fn all_zero_weights_score_zero() {
    for parcel in &upper_midwest() {
        let result = score_parcel(parcel, &WeightSet::zeroed());
        assert_eq!(result.score, 0.0);
        assert!(result.contributions.is_empty());
    }
}

#[test]
fn single_power_weight_scores_raw_power() {
    let weights = WeightSet::zeroed().with(WeightKey::Power, 10);
    assert_relative_eq!(score_parcel(&rosemount(), &weights).score, 92.0);

    let mut perfect = rosemount();
    perfect.power_dist = 100.0;
    assert_relative_eq!(score_parcel(&perfect, &weights).score, 100.0);
}

#[test]
fn score_is_weight_scale_invariant() {
    // Doubling every weight leaves the normalized score unchanged
    let base = WeightSet {
        power: 2,
        fiber: 1,
        water: 3,
        highway: 4,
        rail: 5,
        solar: 1,
        wind: 2,
        flood_risk: 0,
        sentiment: 5,
    };
    let doubled = WeightSet {
        power: 4,
        fiber: 2,
        water: 6,
        highway: 8,
        rail: 10,
        solar: 2,
        wind: 4,
        flood_risk: 0,
        sentiment: 10,
    };
    for parcel in &upper_midwest() {
        let a = score_parcel(parcel, &base).score;
        let b = score_parcel(parcel, &doubled).score;
        assert_relative_eq!(a, b, epsilon = 1e-9);
    }
}

#[test]
fn sentiment_examples() {
    assert_eq!(simulate_sentiment_score(""), 50);
    assert_eq!(simulate_sentiment_score("    "), 50);
    assert_eq!(
        simulate_sentiment_score("We strongly support this investment and the jobs it brings"),
        80
    );
    assert_eq!(
        simulate_sentiment_score("Residents oppose this due to traffic and pollution concerns"),
        10
    );
}

#[test]
fn bucket_boundaries() {
    assert_eq!(score_to_bucket(75.0), SuitabilityBucket::High);
    assert_eq!(score_to_bucket(74.999), SuitabilityBucket::Medium);
    assert_eq!(score_to_bucket(50.0), SuitabilityBucket::Medium);
    assert_eq!(score_to_bucket(49.999), SuitabilityBucket::Low);
}
