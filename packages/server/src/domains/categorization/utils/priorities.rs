//! Rule-based detection of national priorities from idea text.
//!
//! Pure functions, no I/O. Missing fields are treated as empty strings.

use crate::common::text::normalize;
use crate::domains::categorization::models::MoroccanPriority;
use crate::domains::categorization::reference::{PriorityRule, PRIORITY_RULES};

/// At most this many priorities are attached to an idea.
pub const MAX_PRIORITIES: usize = 3;

/// Which rule flagged a priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionRule {
    Category,
    Keyword(&'static str),
    Special(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityDetection {
    pub priority: MoroccanPriority,
    pub rule: DetectionRule,
}

/// Detect priorities and report which rule fired for each.
///
/// Priorities are checked in declaration order and the first three hits are
/// kept. This is truncation, not ranking.
pub fn detect_priorities_explained(
    problem: Option<&str>,
    solution: Option<&str>,
    category: Option<&str>,
    location: Option<&str>,
) -> Vec<PriorityDetection> {
    let category = normalize(category);
    let text = format!(
        "{} {} {} {}",
        problem.unwrap_or_default(),
        solution.unwrap_or_default(),
        category,
        location.unwrap_or_default()
    )
    .to_lowercase();

    PRIORITY_RULES
        .iter()
        .filter_map(|rule| {
            first_matching_rule(rule, &category, &text).map(|matched| PriorityDetection {
                priority: rule.priority,
                rule: matched,
            })
        })
        .take(MAX_PRIORITIES)
        .collect()
}

/// Detect up to three priorities for an idea.
pub fn detect_priorities(
    problem: Option<&str>,
    solution: Option<&str>,
    category: Option<&str>,
    location: Option<&str>,
) -> Vec<MoroccanPriority> {
    detect_priorities_explained(problem, solution, category, location)
        .into_iter()
        .map(|d| d.priority)
        .collect()
}

fn first_matching_rule(rule: &PriorityRule, category: &str, text: &str) -> Option<DetectionRule> {
    if !category.is_empty() && rule.categories.contains(&category) {
        return Some(DetectionRule::Category);
    }

    if let Some(keyword) = rule.keywords.iter().find(|k| text.contains(*k)) {
        return Some(DetectionRule::Keyword(*keyword));
    }

    rule.special_keywords
        .iter()
        .find(|k| text.contains(*k))
        .map(|k| DetectionRule::Special(*k))
}
