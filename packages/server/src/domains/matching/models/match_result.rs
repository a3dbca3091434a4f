use serde::{Deserialize, Serialize};

use crate::common::ProfileId;

/// Per-factor breakdown of a match score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReasoning {
    pub expertise_overlap: u8,
    pub skill_overlap: u8,
    pub location_proximity: u8,
    pub willingness_to_help: u8,
    /// Human-readable notes, one per factor that scored or was missing data.
    pub details: Vec<String>,
}

/// One ranked mentor for an idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub profile_id: ProfileId,
    pub profile_name: String,
    /// 0-100 inclusive
    pub score: u8,
    pub reasoning: MatchReasoning,
}
