use axum::{extract::rejection::JsonRejection, extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::IdeaId;
use crate::domains::matching::{match_idea, MatchResult};
use crate::server::{app::AppState, ApiError};

#[derive(Debug, Deserialize)]
pub struct MatchDiasporaRequest {
    #[serde(alias = "ideaId")]
    pub idea_id: IdeaId,
}

#[derive(Debug, Serialize)]
pub struct MatchDiasporaResponse {
    pub success: bool,
    pub matches: Vec<MatchResult>,
    pub count: usize,
}

/// POST /api/match-diaspora
pub async fn match_diaspora_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<MatchDiasporaRequest>, JsonRejection>,
) -> Result<Json<MatchDiasporaResponse>, ApiError> {
    let Json(request) = payload?;

    let outcome = match_idea(request.idea_id, state.deps.idea_store.as_ref())
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Idea not found: {}", request.idea_id)))?;

    Ok(Json(MatchDiasporaResponse {
        success: true,
        count: outcome.matches.len(),
        matches: outcome.matches,
    }))
}
