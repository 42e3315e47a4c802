//! Axum route handlers for the generation API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::artifact::{Artifact, Provenance};
use crate::generation::generator::generate_artifact;
use crate::generation::intent::GenerationIntent;
use crate::state::AppState;

/// Response envelope for a generated artifact. The server assigns `id` and
/// `created_at` so the frontend can key favorites/history entries; the body
/// field keeps the `compliment` name the frontend already consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub id: Uuid,
    pub compliment: String,
    pub sparkle_score: u8,
    pub tags: Vec<String>,
    /// "upstream" or "fallback" — the UI discloses degraded results.
    pub provenance: Provenance,
    pub created_at: DateTime<Utc>,
}

impl GenerateResponse {
    fn from_artifact(artifact: Artifact) -> Self {
        Self {
            id: Uuid::new_v4(),
            compliment: artifact.text,
            sparkle_score: artifact.sparkle_score,
            tags: artifact.tags,
            provenance: artifact.provenance,
            created_at: Utc::now(),
        }
    }
}

/// POST /api/v1/generate
///
/// Runs the full pipeline for one intent. Invalid intents get a 400; any
/// upstream or normalization failure still answers 200 with a
/// fallback-provenance artifact.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(intent): Json<GenerationIntent>,
) -> Result<Json<GenerateResponse>, AppError> {
    intent
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let artifact = generate_artifact(state.llm.as_ref(), &intent)
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?;

    Ok(Json(GenerateResponse::from_artifact(artifact)))
}
