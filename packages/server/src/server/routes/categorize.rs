use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::common::IdeaId;
use crate::domains::categorization::models::CategoryTags;
use crate::domains::categorization::{
    auto_categorize_idea, categorize_stored_idea, CategorizeInput, StoredCategorization,
};
use crate::server::{app::AppState, ApiError};

/// POST /api/categorize
///
/// Derives category tags for the posted idea fields. When `idea_id` is given
/// the tags are also saved on that idea; a failed save is logged and the tags
/// are still returned.
pub async fn categorize_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<CategorizeInput>, JsonRejection>,
) -> Result<Json<CategoryTags>, ApiError> {
    let Json(input) = payload?;

    let tags = auto_categorize_idea(&input, state.deps.priority_suggester.as_deref()).await;

    if let Some(idea_id) = input.idea_id {
        match state.deps.idea_store.save_category_tags(idea_id, &tags).await {
            Ok(()) => info!(idea_id = %idea_id, "Saved category tags"),
            Err(e) => error!(idea_id = %idea_id, error = %e, "Failed to save category tags"),
        }
    }

    Ok(Json(tags))
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CategorizeIdeaParams {
    #[serde(default = "default_true")]
    pub use_ai_fallback: bool,
}

/// POST /api/ideas/:id/categorize?use_ai_fallback=false
pub async fn categorize_idea_handler(
    Extension(state): Extension<AppState>,
    path: Result<Path<IdeaId>, PathRejection>,
    query: Result<Query<CategorizeIdeaParams>, QueryRejection>,
) -> Result<Json<StoredCategorization>, ApiError> {
    let Path(idea_id) = path?;
    let Query(params) = query?;

    let result = categorize_stored_idea(
        idea_id,
        params.use_ai_fallback,
        state.deps.idea_store.as_ref(),
        state.deps.priority_suggester.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("Idea not found: {}", idea_id)))?;

    Ok(Json(result))
}
