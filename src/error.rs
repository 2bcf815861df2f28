//! Error types for catalog loading, weight input and configuration.
//!
//! The scoring core itself never fails; these errors only arise where
//! untrusted input enters the crate (JSON catalogs, API payloads, env vars).

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScorerError>;

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("weight '{key}' must be between 0 and 10, got {value}")]
    WeightOutOfRange { key: String, value: i64 },

    #[error("unknown weight key '{0}'")]
    UnknownWeightKey(String),

    #[error("unknown persona '{0}'")]
    UnknownPersona(String),

    #[error("parcel '{0}' not found")]
    UnknownParcel(String),

    #[error("duplicate parcel name '{0}'")]
    DuplicateParcel(String),

    #[error("parcel '{parcel}': {field} must be between 0 and 100, got {value}")]
    FactorOutOfRange {
        parcel: String,
        field: &'static str,
        value: f64,
    },

    #[error("parcel '{parcel}': invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { parcel: String, lat: f64, lon: f64 },

    #[error("failed to read parcel catalog {path:?}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse parcel catalog")]
    CatalogParse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
