// Postgres implementation of BaseIdeaStore
//
// Thin adapter over the model query functions so actions can be tested
// against the in-memory store.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::BaseIdeaStore;
use crate::common::{IdeaId, ProfileId};
use crate::domains::categorization::models::CategoryTags;
use crate::domains::ideas::models::{DiasporaProfile, Idea};
use crate::domains::matching::models::MentorProfile;

#[derive(Clone)]
pub struct PostgresIdeaStore {
    pool: PgPool,
}

impl PostgresIdeaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseIdeaStore for PostgresIdeaStore {
    async fn find_idea(&self, id: IdeaId) -> Result<Option<Idea>> {
        Idea::find_by_id(id, &self.pool).await
    }

    async fn save_category_tags(&self, id: IdeaId, tags: &CategoryTags) -> Result<()> {
        Idea::update_category_tags(id, tags, &self.pool).await
    }

    async fn list_mentor_candidates(&self) -> Result<Vec<MentorProfile>> {
        let profiles = DiasporaProfile::find_all(&self.pool).await?;
        Ok(profiles.into_iter().map(MentorProfile::from).collect())
    }

    async fn record_matches(
        &self,
        id: IdeaId,
        profile_ids: &[ProfileId],
        top_score: u8,
    ) -> Result<()> {
        Idea::record_matches(id, profile_ids, top_score, &self.pool).await
    }

    async fn mark_analyzed_if_submitted(&self, id: IdeaId) -> Result<bool> {
        Idea::mark_analyzed_if_submitted(id, &self.pool).await
    }

    async fn mark_matched_if_analyzed(&self, id: IdeaId) -> Result<bool> {
        Idea::mark_matched_if_analyzed(id, &self.pool).await
    }
}
