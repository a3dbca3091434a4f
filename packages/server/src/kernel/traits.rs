// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// The categorization and matching rules are plain functions in the domains;
// these traits describe the collaborators those functions are wired to.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseIdeaStore)

use anyhow::Result;
use async_trait::async_trait;

use crate::common::{IdeaId, ProfileId};
use crate::domains::categorization::models::CategoryTags;
use crate::domains::ideas::models::Idea;
use crate::domains::matching::models::MentorProfile;

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response)
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Complete a prompt expecting JSON response (returns raw JSON string)
    /// Parse with serde_json::from_str in calling code
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        self.complete(prompt).await
    }
}

// =============================================================================
// Priority Suggester Trait (AI fallback for categorization)
// =============================================================================

/// Suggests national-priority codes when the keyword rules find none.
///
/// Implementations own their timeout and retry policy. Returned strings are
/// expected to be priority codes; the categorization engine drops anything else.
#[async_trait]
pub trait BasePrioritySuggester: Send + Sync {
    async fn suggest_priorities(
        &self,
        problem: &str,
        solution: &str,
        category: &str,
    ) -> Result<Vec<String>>;
}

// =============================================================================
// Idea Store Trait (Infrastructure - persistence)
// =============================================================================

#[async_trait]
pub trait BaseIdeaStore: Send + Sync {
    /// Load an idea, `None` if it does not exist
    async fn find_idea(&self, id: IdeaId) -> Result<Option<Idea>>;

    /// Write derived category tags back onto the idea
    async fn save_category_tags(&self, id: IdeaId, tags: &CategoryTags) -> Result<()>;

    /// Diaspora profiles eligible for matching
    async fn list_mentor_candidates(&self) -> Result<Vec<MentorProfile>>;

    /// Store the ranked profile ids and the best score on the idea
    async fn record_matches(&self, id: IdeaId, profile_ids: &[ProfileId], top_score: u8)
        -> Result<()>;

    /// Move the idea from `submitted` to `analyzed`.
    /// Returns false (and changes nothing) when the idea is in any other status.
    async fn mark_analyzed_if_submitted(&self, id: IdeaId) -> Result<bool>;

    /// Move the idea from `analyzed` to `matched`.
    /// Returns false (and changes nothing) when the idea is in any other status.
    async fn mark_matched_if_analyzed(&self, id: IdeaId) -> Result<bool>;
}
