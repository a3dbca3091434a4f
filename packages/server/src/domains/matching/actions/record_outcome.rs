//! Match-and-write-back action used by the HTTP layer.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::common::{IdeaId, ProfileId};
use crate::domains::matching::actions::match_idea_to_profiles;
use crate::domains::matching::models::MatchResult;
use crate::kernel::BaseIdeaStore;

/// Result of matching an idea, with what happened to the write-back.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    /// Top ids and score were stored on the idea
    pub persisted: bool,
    /// The idea moved from analyzed to matched
    pub status_changed: bool,
}

/// Write the ranking back onto the idea.
///
/// Stores the matched profile ids and the top score, then moves the idea from
/// `analyzed` to `matched`. Nothing is written when there are no matches, and
/// the status is left alone when the matches could not be stored.
/// Failures are logged and reported through the flags, never returned: the
/// ranking stays valid whether or not it could be saved.
pub async fn record_match_outcome(
    idea_id: IdeaId,
    matches: Vec<MatchResult>,
    store: &dyn BaseIdeaStore,
) -> MatchOutcome {
    let Some(top_score) = matches.first().map(|m| m.score) else {
        return MatchOutcome {
            matches,
            persisted: false,
            status_changed: false,
        };
    };

    let profile_ids: Vec<ProfileId> = matches.iter().map(|m| m.profile_id).collect();

    let persisted = match store.record_matches(idea_id, &profile_ids, top_score).await {
        Ok(()) => true,
        Err(e) => {
            error!(idea_id = %idea_id, error = %e, "Failed to store match results");
            false
        }
    };

    // An idea is only `matched` once its matches are actually stored
    let status_changed = if persisted {
        match store.mark_matched_if_analyzed(idea_id).await {
            Ok(changed) => changed,
            Err(e) => {
                error!(idea_id = %idea_id, error = %e, "Failed to update idea status");
                false
            }
        }
    } else {
        false
    };

    info!(
        idea_id = %idea_id,
        count = matches.len(),
        top_score,
        persisted,
        status_changed,
        "Recorded match outcome"
    );

    MatchOutcome {
        matches,
        persisted,
        status_changed,
    }
}

/// Load an idea and its candidates, rank them and write the result back.
///
/// Returns `Ok(None)` when the idea does not exist. Only load failures are
/// errors; write-back failures are reflected in the outcome flags.
pub async fn match_idea(idea_id: IdeaId, store: &dyn BaseIdeaStore) -> Result<Option<MatchOutcome>> {
    let Some(idea) = store
        .find_idea(idea_id)
        .await
        .context("Failed to load idea")?
    else {
        return Ok(None);
    };

    let profiles = store
        .list_mentor_candidates()
        .await
        .context("Failed to load diaspora profiles")?;

    info!(idea_id = %idea_id, candidates = profiles.len(), "Matching idea to diaspora profiles");

    let matches = match_idea_to_profiles(&idea.for_matching(), &profiles);

    Ok(Some(record_match_outcome(idea_id, matches, store).await))
}
