//! Categorize an idea that already lives in the store.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::common::IdeaId;
use crate::domains::categorization::actions::auto_categorize_idea;
use crate::domains::categorization::models::CategoryTags;
use crate::kernel::{BaseIdeaStore, BasePrioritySuggester};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCategorization {
    pub tags: CategoryTags,
    /// Tags were written back onto the idea
    pub persisted: bool,
    /// The idea moved from submitted to analyzed
    pub status_changed: bool,
}

/// Load an idea, derive its tags, save them and mark it analyzed.
///
/// Returns `Ok(None)` when the idea does not exist. The status only moves when
/// the tags were saved, and only out of `submitted`.
pub async fn categorize_stored_idea(
    idea_id: IdeaId,
    use_ai_fallback: bool,
    store: &dyn BaseIdeaStore,
    suggester: Option<&dyn BasePrioritySuggester>,
) -> Result<Option<StoredCategorization>> {
    let Some(idea) = store
        .find_idea(idea_id)
        .await
        .context("Failed to load idea")?
    else {
        return Ok(None);
    };

    let tags = auto_categorize_idea(&idea.categorize_input(use_ai_fallback), suggester).await;

    let persisted = match store.save_category_tags(idea_id, &tags).await {
        Ok(()) => true,
        Err(e) => {
            error!(idea_id = %idea_id, error = %e, "Failed to save category tags");
            false
        }
    };

    let status_changed = if persisted {
        match store.mark_analyzed_if_submitted(idea_id).await {
            Ok(changed) => changed,
            Err(e) => {
                error!(idea_id = %idea_id, error = %e, "Failed to update idea status");
                false
            }
        }
    } else {
        false
    };

    info!(idea_id = %idea_id, persisted, status_changed, "Categorized stored idea");

    Ok(Some(StoredCategorization {
        tags,
        persisted,
        status_changed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::categorization::models::MoroccanPriority;
    use crate::domains::ideas::models::{Idea, IdeaStatus};
    use crate::kernel::test_dependencies::{InMemoryIdeaStore, MockPrioritySuggester};

    fn clinic_idea(status: IdeaStatus) -> Idea {
        let mut idea = Idea::new("Clinique mobile", status);
        idea.problem_statement = Some("Pas de médecin dans le douar".to_string());
        idea.category = Some("health".to_string());
        idea
    }

    #[tokio::test]
    async fn saves_tags_and_marks_submitted_idea_analyzed() {
        let idea = clinic_idea(IdeaStatus::Submitted);
        let store = InMemoryIdeaStore::new().with_idea(idea.clone());

        let result = categorize_stored_idea(idea.id, false, &store, None)
            .await
            .unwrap()
            .unwrap();

        assert!(result.persisted);
        assert!(result.status_changed);
        assert!(result
            .tags
            .moroccan_priorities
            .contains(&MoroccanPriority::HealthcareImprovement));

        let stored = store.idea(idea.id).unwrap();
        assert_eq!(stored.status(), Some(IdeaStatus::Analyzed));
        assert!(stored
            .moroccan_priorities
            .unwrap()
            .contains(&"healthcare_improvement".to_string()));
    }

    #[tokio::test]
    async fn leaves_later_statuses_alone() {
        let idea = clinic_idea(IdeaStatus::Matched);
        let store = InMemoryIdeaStore::new().with_idea(idea.clone());

        let result = categorize_stored_idea(idea.id, false, &store, None)
            .await
            .unwrap()
            .unwrap();

        assert!(result.persisted);
        assert!(!result.status_changed);
        assert_eq!(store.idea(idea.id).unwrap().status(), Some(IdeaStatus::Matched));
    }

    #[tokio::test]
    async fn failed_save_keeps_status() {
        let idea = clinic_idea(IdeaStatus::Submitted);
        let store = InMemoryIdeaStore::new().with_idea(idea.clone()).failing_writes();

        let result = categorize_stored_idea(idea.id, false, &store, None)
            .await
            .unwrap()
            .unwrap();

        assert!(!result.persisted);
        assert!(!result.status_changed);
        assert_eq!(store.idea(idea.id).unwrap().status(), Some(IdeaStatus::Submitted));
    }

    #[tokio::test]
    async fn stored_idea_without_keywords_uses_fallback() {
        let idea = Idea::new("Untitled", IdeaStatus::Submitted);
        let store = InMemoryIdeaStore::new().with_idea(idea.clone());
        let suggester = MockPrioritySuggester::new().with_codes(&["youth_employment"]);

        let result = categorize_stored_idea(idea.id, true, &store, Some(&suggester))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            result.tags.moroccan_priorities,
            vec![MoroccanPriority::YouthEmployment]
        );
        assert_eq!(suggester.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_idea_is_none() {
        let store = InMemoryIdeaStore::new();
        let result = categorize_stored_idea(IdeaId::new(), false, &store, None)
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
