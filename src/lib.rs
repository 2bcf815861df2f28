//! Parcel Scorer Rust Implementation
//!
//! Multi-factor land suitability scoring for institutional infrastructure
//! siting. A small catalog of parcels is scored 0-100 under user weights,
//! ranked, bucketed High/Medium/Low and described as map markers.
//!
//! - `scoring/`: factor normalization, weighted aggregation, sentiment heuristic, buckets
//! - `parcel`: parcel records and the built-in catalog
//! - `weights`: weight sets and persona presets
//! - `session`: per-user persona and weight state
//! - `ranking`, `markers`, `report`: presentation data built from scores

pub mod error;
pub mod parcel;
pub mod weights;
pub mod scoring;
pub mod session;
pub mod ranking;
pub mod markers;
pub mod report;
pub mod config;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{Result, ScorerError};
pub use parcel::{upper_midwest, Parcel, ParcelCatalog};
pub use weights::{Persona, WeightKey, WeightSet};
pub use scoring::{
    bucket_to_class, compute_parcel_score, score_parcel, score_to_bucket, simulate_sentiment_score,
    ScoreResult, SuitabilityBucket,
};
pub use session::Session;
pub use ranking::{rank_parcels, rank_parcels_parallel, RankedParcel};
pub use config::ServerConfig;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
