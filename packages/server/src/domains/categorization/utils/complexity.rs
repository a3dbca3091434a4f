//! Complexity heuristic.
//!
//! Needs the budget tier, so it must run after `map_budget_tier`.

use crate::domains::categorization::models::{BudgetTier, Complexity};

fn budget_weight(tier: BudgetTier) -> usize {
    match tier {
        BudgetTier::Micro | BudgetTier::Small => 0,
        BudgetTier::Medium => 1,
        BudgetTier::Large => 2,
        BudgetTier::Enterprise => 3,
    }
}

/// Estimate implementation complexity from the capability and integration
/// lists plus the budget tier. `None` when there is nothing to go on.
pub fn determine_complexity(
    ai_capabilities: &[String],
    integration_points: &[String],
    budget_tier: Option<BudgetTier>,
) -> Option<Complexity> {
    if ai_capabilities.is_empty() && integration_points.is_empty() && budget_tier.is_none() {
        return None;
    }

    let load =
        ai_capabilities.len() + integration_points.len() + budget_tier.map_or(0, budget_weight);

    let complexity = match load {
        0..=1 => Complexity::Simple,
        2..=3 => Complexity::Moderate,
        4..=5 => Complexity::Complex,
        _ => Complexity::Advanced,
    };

    Some(complexity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn nothing_known_yields_none() {
        assert_eq!(determine_complexity(&[], &[], None), None);
    }

    #[test]
    fn small_budget_alone_is_simple() {
        assert_eq!(
            determine_complexity(&[], &[], Some(BudgetTier::Small)),
            Some(Complexity::Simple)
        );
    }

    #[test]
    fn capabilities_and_integrations_add_up() {
        let caps = list(&["ocr", "classification"]);
        let integrations = list(&["whatsapp"]);
        assert_eq!(
            determine_complexity(&caps, &integrations, None),
            Some(Complexity::Moderate)
        );
    }

    #[test]
    fn budget_tier_raises_complexity() {
        let caps = list(&["ocr", "classification"]);
        let integrations = list(&["whatsapp"]);
        assert_eq!(
            determine_complexity(&caps, &integrations, Some(BudgetTier::Large)),
            Some(Complexity::Complex)
        );
        assert_eq!(
            determine_complexity(&caps, &integrations, Some(BudgetTier::Enterprise)),
            Some(Complexity::Advanced)
        );
    }
}
