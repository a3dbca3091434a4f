use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::priority::MoroccanPriority;

/// Budget bucket derived from a free-form cost estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
}

impl BudgetTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Micro => "micro",
            BudgetTier::Small => "small",
            BudgetTier::Medium => "medium",
            BudgetTier::Large => "large",
            BudgetTier::Enterprise => "enterprise",
        }
    }
}

/// Where an idea is meant to operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Urban,
    Rural,
    Regional,
    National,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Urban => "urban",
            LocationType::Rural => "rural",
            LocationType::Regional => "regional",
            LocationType::National => "national",
        }
    }
}

/// Implementation complexity, ordered from least to most demanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
    Advanced,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Moderate => "moderate",
            Complexity::Complex => "complex",
            Complexity::Advanced => "advanced",
        }
    }
}

/// UN Sustainable Development Goals implied by the detected priorities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdgAlignment {
    pub sdg_tags: Vec<u8>,
    /// Keyed `sdg_<n>`.
    pub sdg_confidence: BTreeMap<String, f64>,
    pub morocco_priorities: Vec<MoroccanPriority>,
}

/// Everything the rule engine derives for one idea.
///
/// Invariant: `sdg_alignment.is_some() == !moroccan_priorities.is_empty()`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTags {
    pub moroccan_priorities: Vec<MoroccanPriority>,
    pub budget_tier: Option<BudgetTier>,
    pub location_type: Option<LocationType>,
    pub complexity: Option<Complexity>,
    pub sdg_alignment: Option<SdgAlignment>,
}
