//! Catalog scoring and ranking
//!
//! Scores every parcel under one WeightSet and orders them best-first.
//! Includes both sequential and parallel (Rayon) implementations; they
//! produce identical output.

use crate::parcel::{Parcel, ParcelCatalog};
use crate::scoring::{score_parcel, FactorContribution, SuitabilityBucket};
use crate::weights::WeightSet;
use rayon::prelude::*;
use serde::Serialize;

/// Placeholder shown when there is nothing to rank
pub const NO_PARCEL: &str = "—";

/// One row of the ranking list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedParcel {
    pub name: String,
    pub city: String,
    pub lat: f64,
    pub lon: f64,
    pub score: f64,
    pub bucket: SuitabilityBucket,
    pub css_class: &'static str,
    pub gated: bool,
    pub contributions: Vec<FactorContribution>,
}

impl RankedParcel {
    fn build(parcel: &Parcel, weights: &WeightSet) -> Self {
        let result = score_parcel(parcel, weights);
        let bucket = SuitabilityBucket::from_score(result.score);
        Self {
            name: parcel.name.clone(),
            city: parcel.city.clone(),
            lat: parcel.lat,
            lon: parcel.lon,
            score: result.score,
            bucket,
            css_class: bucket.css_class(),
            gated: result.gated,
            contributions: result.contributions,
        }
    }
}

/// Headline metric: best parcel and its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopParcel {
    pub name: String,
    pub score: f64,
}

/// Best-first, ties keep catalog order (sort is stable)
fn sort_best_first(entries: &mut [RankedParcel]) {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Name → score for every parcel, in catalog order
pub fn score_catalog(catalog: &ParcelCatalog, weights: &WeightSet) -> Vec<(String, f64)> {
    catalog
        .iter()
        .map(|parcel| (parcel.name.clone(), score_parcel(parcel, weights).score))
        .collect()
}

/// Score and rank every parcel
pub fn rank_parcels(catalog: &ParcelCatalog, weights: &WeightSet) -> Vec<RankedParcel> {
    let mut entries: Vec<RankedParcel> = catalog
        .iter()
        .map(|parcel| RankedParcel::build(parcel, weights))
        .collect();
    sort_best_first(&mut entries);
    tracing::debug!("Ranked {} parcels", entries.len());
    entries
}

/// Parallel version of `rank_parcels`
pub fn rank_parcels_parallel(catalog: &ParcelCatalog, weights: &WeightSet) -> Vec<RankedParcel> {
    let mut entries: Vec<RankedParcel> = catalog
        .as_slice()
        .par_iter()
        .map(|parcel| RankedParcel::build(parcel, weights))
        .collect();
    sort_best_first(&mut entries);
    entries
}

/// First entry of a ranking, or the placeholder when it is empty
pub fn top_parcel(ranked: &[RankedParcel]) -> TopParcel {
    ranked
        .first()
        .map(|entry| TopParcel {
            name: entry.name.clone(),
            score: entry.score,
        })
        .unwrap_or_else(|| TopParcel {
            name: NO_PARCEL.to_string(),
            score: 0.0,
        })
}
