//! Parcel scoring core
//!
//! - `factors.rs` - raw attributes → ten normalized 0-100 factor scores
//! - `aggregate.rs` - weighted aggregation with the flood zero-out gate
//! - `sentiment.rs` - keyword-counting council sentiment heuristic
//! - `bucket.rs` - score → High/Medium/Low tier

pub mod factors;
pub mod aggregate;
pub mod sentiment;
pub mod bucket;

pub use factors::{normalize_factors, Factor, FactorScores};
pub use aggregate::{
    compute_parcel_score, is_flood_vetoed, score_parcel, FactorContribution, ScoreResult,
    FLOOD_GATE_THRESHOLD,
};
pub use sentiment::{analyze_sentiment, simulate_sentiment_score, suggested_weight, SentimentReading};
pub use bucket::{bucket_to_class, score_to_bucket, SuitabilityBucket};
