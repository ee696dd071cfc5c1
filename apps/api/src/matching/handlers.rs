//! Axum route handlers for the Match API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::models::MatchReport;
use crate::matching::scorer::ScorerConfig;
use crate::matching::weights::{ScoreWeights, TOP_MATCHES};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both fields are taken as raw JSON so shape errors surface as a
/// structured validation error instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub resume: Value,
    #[serde(default)]
    pub jobs: Value,
}

#[derive(Debug, Serialize)]
pub struct MethodologyResponse {
    pub scorer_backend: String,
    pub weights: ScoreWeights,
    pub top_matches_limit: usize,
    pub config: ScorerConfig,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Scores a resume against a batch of job postings and returns the ranked report.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!("request body is invalid: {}", rejection.body_text()))
    })?;
    let report = state.scorer.score(&request.resume, &request.jobs)?;
    Ok(Json(report))
}

/// GET /api/v1/match/methodology
///
/// Weights and active flags, so the presenter can quote them verbatim.
pub async fn handle_methodology(State(state): State<AppState>) -> Json<MethodologyResponse> {
    Json(MethodologyResponse {
        scorer_backend: state.scorer.backend().to_string(),
        weights: ScoreWeights::default(),
        top_matches_limit: TOP_MATCHES,
        config: state.scorer.config().clone(),
    })
}
