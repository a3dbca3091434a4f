use serde::{Deserialize, Deserializer, Serialize};

use crate::common::ProfileId;

/// Candidate mentor as seen by the match scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorProfile {
    pub id: ProfileId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Accepts a list or a single (comma-separated) string.
    #[serde(default, deserialize_with = "deserialize_expertise")]
    pub expertise: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, alias = "willing_to_mentor")]
    pub willing_to_mentor: bool,
    #[serde(default, alias = "willing_to_cofund")]
    pub willing_to_cofund: bool,
    #[serde(default, alias = "attended_workshop")]
    pub attended_workshop: bool,
}

/// Idea fields the match scorer reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdeaForMatching {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub submitter_skills: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

fn deserialize_expertise<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let raw = Option::<StringOrList>::deserialize(deserializer)?;
    Ok(normalize_expertise(raw))
}

fn deserialize_string_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn normalize_expertise(raw: Option<StringOrList>) -> Vec<String> {
    let entries = match raw {
        None => Vec::new(),
        Some(StringOrList::One(s)) => s.split(',').map(str::to_string).collect(),
        Some(StringOrList::Many(list)) => list,
    };

    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}
