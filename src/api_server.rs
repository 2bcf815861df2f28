// Axum API Server Module
//
// Purpose: REST API over the parcel scorer. The catalog is read-only and
// shared; every request carries its own persona/weights, so handlers hold no
// mutable state.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;

use crate::config::ServerConfig;
use crate::error::ScorerError;
use crate::markers::{build_map_view, MapView};
use crate::parcel::{Parcel, ParcelCatalog};
use crate::report::{MarkdownFormatter, RankingReport};
use crate::scoring::{analyze_sentiment, score_parcel, SentimentReading, SuitabilityBucket};
use crate::weights::{Persona, WeightSet};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ParcelCatalog>,
    pub default_persona: Persona,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Loading parcel catalog...");
        let catalog = config
            .load_catalog()
            .with_context(|| format!("Failed to load parcel catalog {:?}", config.parcels_file))?;
        tracing::info!("Catalog ready ({} parcels)", catalog.len());

        Ok(Self::with_catalog(catalog, config.default_persona))
    }

    pub fn with_catalog(catalog: ParcelCatalog, default_persona: Persona) -> Self {
        Self {
            catalog: Arc::new(catalog),
            default_persona,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Reference data
        .route("/api/personas", get(list_personas))
        .route("/api/parcels", get(list_parcels))

        // Scoring endpoints
        .route("/api/parcels/score", post(score_parcels))
        .route("/api/parcels/markers", post(parcel_markers))
        .route("/api/parcels/report", post(parcel_report))
        .route("/api/parcels/:name/score", get(score_single_parcel))

        // Sentiment scraper
        .route("/api/sentiment", post(scrape_sentiment))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Request Types
// ============================================================================

/// Persona plus optional per-key weight overrides
#[derive(Debug, Default, serde::Deserialize)]
struct ScoreRequest {
    persona: Option<String>,
    #[serde(default)]
    weights: BTreeMap<String, i64>,
}

#[derive(Debug, serde::Deserialize)]
struct PersonaQuery {
    persona: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct SentimentRequest {
    #[serde(default)]
    text: String,
}

/// Resolve the persona and start from its defaults, then apply overrides
fn resolve_weights(
    state: &AppState,
    persona: Option<&str>,
    overrides: &BTreeMap<String, i64>,
) -> Result<(Persona, WeightSet), AppError> {
    let persona = match persona {
        Some(name) => name.parse()?,
        None => state.default_persona,
    };

    let mut weights = persona.default_weights();
    for (key, value) in overrides {
        weights.set_by_name(key, *value)?;
    }

    Ok((persona, weights))
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_personas() -> Json<serde_json::Value> {
    let personas: Vec<serde_json::Value> = Persona::ALL
        .iter()
        .map(|p| {
            serde_json::json!({
                "key": p.as_str(),
                "name": p.display_text(),
                "weights": p.default_weights(),
            })
        })
        .collect();

    Json(serde_json::json!({ "personas": personas }))
}

async fn list_parcels(State(state): State<AppState>) -> Json<Vec<Parcel>> {
    Json(state.catalog.as_slice().to_vec())
}

async fn score_parcels(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<RankingReport>, AppError> {
    let (persona, weights) = resolve_weights(&state, payload.persona.as_deref(), &payload.weights)?;

    tracing::info!("Scoring {} parcels for persona {}", state.catalog.len(), persona);
    let report = RankingReport::build(&state.catalog, persona, weights);

    Ok(Json(report))
}

async fn parcel_markers(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<MapView>, AppError> {
    let (persona, weights) = resolve_weights(&state, payload.persona.as_deref(), &payload.weights)?;
    let report = RankingReport::build(&state.catalog, persona, weights);

    Ok(Json(build_map_view(&report.ranked)))
}

async fn parcel_report(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (persona, weights) = resolve_weights(&state, payload.persona.as_deref(), &payload.weights)?;
    let report = RankingReport::build(&state.catalog, persona, weights);

    Ok(Json(serde_json::json!({
        "markdown": MarkdownFormatter::format(&report),
    })))
}

async fn score_single_parcel(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PersonaQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let (persona, weights) = resolve_weights(&state, params.persona.as_deref(), &BTreeMap::new())?;
    let parcel = state.catalog.require(&name)?;

    let result = score_parcel(parcel, &weights);
    let bucket = SuitabilityBucket::from_score(result.score);

    Ok(Json(serde_json::json!({
        "name": parcel.name,
        "city": parcel.city,
        "persona": persona,
        "score": result.score,
        "bucket": bucket,
        "css_class": bucket.css_class(),
        "gated": result.gated,
        "contributions": result.contributions,
    })))
}

async fn scrape_sentiment(Json(payload): Json<SentimentRequest>) -> Json<SentimentReading> {
    let reading = analyze_sentiment(&payload.text);
    tracing::debug!(
        "Sentiment scrape: {} positive / {} negative hits -> {}",
        reading.positive_hits,
        reading.negative_hits,
        reading.score
    );
    Json(reading)
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ScorerError> for AppError {
    fn from(err: ScorerError) -> Self {
        match err {
            ScorerError::UnknownParcel(_) => AppError::NotFound(err.to_string()),
            ScorerError::WeightOutOfRange { .. }
            | ScorerError::UnknownWeightKey(_)
            | ScorerError::UnknownPersona(_) => {
                tracing::warn!("Rejected request: {}", err);
                AppError::BadRequest(err.to_string())
            }
            _ => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
