//! Auto-categorize action - rule engine with optional AI fallback

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::common::IdeaId;
use crate::domains::categorization::models::{CategoryTags, MoroccanPriority, SdgAlignment};
use crate::domains::categorization::utils::{
    detect_priorities_explained, determine_complexity, determine_location_type,
    map_budget_tier, map_priorities_to_sdgs, MAX_PRIORITIES,
};
use crate::kernel::BasePrioritySuggester;

fn default_true() -> bool {
    true
}

/// Idea fields the categorization rules look at.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategorizeInput {
    /// When set, the derived tags are written back onto this idea.
    #[serde(default, alias = "ideaId")]
    pub idea_id: Option<IdeaId>,
    pub problem_statement: Option<String>,
    pub proposed_solution: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub ai_capabilities_needed: Option<Vec<String>>,
    #[serde(default)]
    pub integration_points: Option<Vec<String>>,
    #[serde(default = "default_true", alias = "useAIFallback")]
    pub use_ai_fallback: bool,
}

/// Derive category tags for an idea.
///
/// Runs the keyword rules first. Only when they find nothing, `use_ai_fallback`
/// is set and a suggester is available is the suggester consulted; its
/// failures are logged and treated as "no priorities". Never returns an error.
pub async fn auto_categorize_idea(
    input: &CategorizeInput,
    suggester: Option<&dyn BasePrioritySuggester>,
) -> CategoryTags {
    let detections = detect_priorities_explained(
        input.problem_statement.as_deref(),
        input.proposed_solution.as_deref(),
        input.category.as_deref(),
        input.location.as_deref(),
    );
    debug!(?detections, "Rule-based priority detection");

    let mut priorities: Vec<MoroccanPriority> = detections.iter().map(|d| d.priority).collect();

    if priorities.is_empty() && input.use_ai_fallback {
        priorities = match suggester {
            Some(suggester) => suggest_with_fallback(input, suggester).await,
            None => {
                warn!("AI fallback requested but no priority suggester is configured");
                Vec::new()
            }
        };
    }

    let budget_tier = map_budget_tier(input.estimated_cost.as_deref());
    let location_type = determine_location_type(
        input.location.as_deref(),
        input.category.as_deref(),
        input.problem_statement.as_deref(),
    );
    let complexity = determine_complexity(
        input.ai_capabilities_needed.as_deref().unwrap_or_default(),
        input.integration_points.as_deref().unwrap_or_default(),
        budget_tier,
    );

    let sdg_alignment = if priorities.is_empty() {
        None
    } else {
        let (sdg_tags, sdg_confidence) = map_priorities_to_sdgs(&priorities);
        Some(SdgAlignment {
            sdg_tags,
            sdg_confidence,
            morocco_priorities: priorities.clone(),
        })
    };

    info!(
        priorities = ?priorities,
        budget_tier = ?budget_tier,
        location_type = ?location_type,
        complexity = ?complexity,
        "Idea categorized"
    );

    CategoryTags {
        moroccan_priorities: priorities,
        budget_tier,
        location_type,
        complexity,
        sdg_alignment,
    }
}

async fn suggest_with_fallback(
    input: &CategorizeInput,
    suggester: &dyn BasePrioritySuggester,
) -> Vec<MoroccanPriority> {
    let result = suggester
        .suggest_priorities(
            input.problem_statement.as_deref().unwrap_or_default(),
            input.proposed_solution.as_deref().unwrap_or_default(),
            input.category.as_deref().unwrap_or_default(),
        )
        .await;

    match result {
        Ok(codes) => {
            let priorities = sanitize_suggestions(&codes);
            info!(
                suggested = codes.len(),
                accepted = priorities.len(),
                "AI fallback suggested priorities"
            );
            priorities
        }
        Err(e) => {
            warn!(error = %e, "AI priority fallback failed, continuing without priorities");
            Vec::new()
        }
    }
}

/// Keep only valid priority codes, first occurrence wins, at most three.
pub fn sanitize_suggestions(codes: &[String]) -> Vec<MoroccanPriority> {
    let mut priorities = Vec::new();
    for code in codes {
        match code.parse::<MoroccanPriority>() {
            Ok(priority) if !priorities.contains(&priority) => priorities.push(priority),
            Ok(_) => {}
            Err(_) => debug!(code = %code, "Discarding unknown priority code from AI fallback"),
        }
        if priorities.len() == MAX_PRIORITIES {
            break;
        }
    }
    priorities
}
