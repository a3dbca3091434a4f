use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{IdeaId, ProfileId};
use crate::domains::categorization::actions::CategorizeInput;
use crate::domains::categorization::models::CategoryTags;
use crate::domains::matching::models::IdeaForMatching;

/// Submitted idea - SQL persistence layer
///
/// The idea row is the source of truth. Category tags and match results are
/// derived views written back here as denormalized columns.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Idea {
    pub id: IdeaId,
    pub title: String,
    pub problem_statement: Option<String>,
    pub proposed_solution: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub estimated_cost: Option<String>,
    pub ai_capabilities_needed: Option<Vec<String>>,
    pub integration_points: Option<Vec<String>>,
    pub submitter_skills: Option<Vec<String>>,
    pub status: String, // 'submitted', 'analyzed', 'matched', ...

    // Derived: categorization
    pub moroccan_priorities: Option<Vec<String>>,
    pub budget_tier: Option<String>,
    pub location_type: Option<String>,
    pub complexity: Option<String>,
    pub sdg_tags: Option<Vec<i32>>,
    pub sdg_confidence: Option<serde_json::Value>,

    // Derived: matching
    pub matched_diaspora: Option<Vec<ProfileId>>,
    pub top_match_score: Option<i32>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Idea lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IdeaStatus {
    Submitted,
    Analyzed,
    Matched,
    Funded,
    Implemented,
    Rejected,
}

impl std::fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdeaStatus::Submitted => write!(f, "submitted"),
            IdeaStatus::Analyzed => write!(f, "analyzed"),
            IdeaStatus::Matched => write!(f, "matched"),
            IdeaStatus::Funded => write!(f, "funded"),
            IdeaStatus::Implemented => write!(f, "implemented"),
            IdeaStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for IdeaStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "submitted" => Ok(IdeaStatus::Submitted),
            "analyzed" => Ok(IdeaStatus::Analyzed),
            "matched" => Ok(IdeaStatus::Matched),
            "funded" => Ok(IdeaStatus::Funded),
            "implemented" => Ok(IdeaStatus::Implemented),
            "rejected" => Ok(IdeaStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid idea status: {}", s)),
        }
    }
}

impl Idea {
    /// Minimal idea with the given status, everything else empty.
    pub fn new(title: impl Into<String>, status: IdeaStatus) -> Self {
        let now = Utc::now();
        Self {
            id: IdeaId::new(),
            title: title.into(),
            problem_statement: None,
            proposed_solution: None,
            category: None,
            location: None,
            estimated_cost: None,
            ai_capabilities_needed: None,
            integration_points: None,
            submitter_skills: None,
            status: status.to_string(),
            moroccan_priorities: None,
            budget_tier: None,
            location_type: None,
            complexity: None,
            sdg_tags: None,
            sdg_confidence: None,
            matched_diaspora: None,
            top_match_score: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Parsed status; unknown strings yield `None`.
    pub fn status(&self) -> Option<IdeaStatus> {
        self.status.parse().ok()
    }

    /// The subset of fields the match scorer reads.
    pub fn for_matching(&self) -> IdeaForMatching {
        IdeaForMatching {
            category: self.category.clone(),
            location: self.location.clone(),
            submitter_skills: self.submitter_skills.clone().unwrap_or_default(),
        }
    }

    /// Categorization input built from the stored fields.
    pub fn categorize_input(&self, use_ai_fallback: bool) -> CategorizeInput {
        CategorizeInput {
            idea_id: Some(self.id),
            problem_statement: self.problem_statement.clone(),
            proposed_solution: self.proposed_solution.clone(),
            category: self.category.clone(),
            location: self.location.clone(),
            estimated_cost: self.estimated_cost.clone(),
            ai_capabilities_needed: self.ai_capabilities_needed.clone(),
            integration_points: self.integration_points.clone(),
            use_ai_fallback,
        }
    }

    /// Copy derived category tags onto this in-memory row.
    pub fn apply_category_tags(&mut self, tags: &CategoryTags) {
        let columns = TagColumns::from(tags);
        self.moroccan_priorities = Some(columns.priorities);
        self.budget_tier = columns.budget_tier;
        self.location_type = columns.location_type;
        self.complexity = columns.complexity;
        self.sdg_tags = columns.sdg_tags;
        self.sdg_confidence = columns.sdg_confidence;
        self.updated_at = Utc::now();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Find idea by ID
    pub async fn find_by_id(id: IdeaId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM ideas WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Persist derived category tags
    pub async fn update_category_tags(id: IdeaId, tags: &CategoryTags, pool: &PgPool) -> Result<()> {
        let columns = TagColumns::from(tags);

        let result = sqlx::query(
            r#"
            UPDATE ideas
            SET moroccan_priorities = $2,
                budget_tier = $3,
                location_type = $4,
                complexity = $5,
                sdg_tags = $6,
                sdg_confidence = $7,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&columns.priorities)
        .bind(&columns.budget_tier)
        .bind(&columns.location_type)
        .bind(&columns.complexity)
        .bind(&columns.sdg_tags)
        .bind(&columns.sdg_confidence)
        .execute(pool)
        .await
        .context("Failed to update idea category tags")?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Idea not found: {}", id);
        }

        Ok(())
    }

    /// Store top matched profile ids and the best score
    pub async fn record_matches(
        id: IdeaId,
        profile_ids: &[ProfileId],
        top_score: u8,
        pool: &PgPool,
    ) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE ideas
            SET matched_diaspora = $2,
                top_match_score = $3,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(profile_ids)
        .bind(i32::from(top_score))
        .execute(pool)
        .await
        .context("Failed to record idea matches")?;

        if result.rows_affected() == 0 {
            anyhow::bail!("Idea not found: {}", id);
        }

        Ok(())
    }

    /// Conditional status transition submitted -> analyzed.
    pub async fn mark_analyzed_if_submitted(id: IdeaId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE ideas SET status = 'analyzed', updated_at = NOW()
             WHERE id = $1 AND status = 'submitted'",
        )
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to update idea status")?;

        Ok(result.rows_affected() > 0)
    }

    /// Conditional status transition analyzed -> matched.
    ///
    /// A single guarded UPDATE, so concurrent callers cannot move an idea out
    /// of any other status.
    pub async fn mark_matched_if_analyzed(id: IdeaId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE ideas SET status = 'matched', updated_at = NOW()
             WHERE id = $1 AND status = 'analyzed'",
        )
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to update idea status")?;

        Ok(result.rows_affected() > 0)
    }
}

/// Column representation of `CategoryTags`.
struct TagColumns {
    priorities: Vec<String>,
    budget_tier: Option<String>,
    location_type: Option<String>,
    complexity: Option<String>,
    sdg_tags: Option<Vec<i32>>,
    sdg_confidence: Option<serde_json::Value>,
}

impl From<&CategoryTags> for TagColumns {
    fn from(tags: &CategoryTags) -> Self {
        let alignment = tags.sdg_alignment.as_ref();
        Self {
            priorities: tags
                .moroccan_priorities
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
            budget_tier: tags.budget_tier.map(|t| t.as_str().to_string()),
            location_type: tags.location_type.map(|t| t.as_str().to_string()),
            complexity: tags.complexity.map(|c| c.as_str().to_string()),
            sdg_tags: alignment.map(|a| a.sdg_tags.iter().map(|n| i32::from(*n)).collect()),
            sdg_confidence: alignment.and_then(|a| serde_json::to_value(&a.sdg_confidence).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::categorization::models::{BudgetTier, MoroccanPriority, SdgAlignment};
    use std::collections::BTreeMap;

    #[test]
    fn status_round_trips() {
        for status in [
            IdeaStatus::Submitted,
            IdeaStatus::Analyzed,
            IdeaStatus::Matched,
            IdeaStatus::Funded,
            IdeaStatus::Implemented,
            IdeaStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<IdeaStatus>().unwrap(), status);
        }
        assert!("archived".parse::<IdeaStatus>().is_err());
    }

    #[test]
    fn for_matching_defaults_missing_skills_to_empty() {
        let mut idea = Idea::new("Clinique mobile", IdeaStatus::Analyzed);
        idea.category = Some("health".to_string());

        let matching = idea.for_matching();
        assert_eq!(matching.category.as_deref(), Some("health"));
        assert!(matching.submitter_skills.is_empty());
    }

    #[test]
    fn apply_category_tags_fills_columns() {
        let mut idea = Idea::new("Panneaux solaires", IdeaStatus::Submitted);
        let tags = CategoryTags {
            moroccan_priorities: vec![MoroccanPriority::GreenMorocco],
            budget_tier: Some(BudgetTier::Micro),
            location_type: None,
            complexity: None,
            sdg_alignment: Some(SdgAlignment {
                sdg_tags: vec![7, 13, 15],
                sdg_confidence: BTreeMap::from([("sdg_7".to_string(), 0.9)]),
                morocco_priorities: vec![MoroccanPriority::GreenMorocco],
            }),
        };

        idea.apply_category_tags(&tags);

        assert_eq!(idea.moroccan_priorities, Some(vec!["green_morocco".to_string()]));
        assert_eq!(idea.budget_tier.as_deref(), Some("micro"));
        assert_eq!(idea.sdg_tags, Some(vec![7, 13, 15]));
        assert_eq!(idea.sdg_confidence.unwrap()["sdg_7"], 0.9);
    }
}
