//! LLM-backed priority suggester used when the keyword rules find nothing.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::domains::categorization::models::MoroccanPriority;
use crate::kernel::{BaseAI, BasePrioritySuggester};

/// Asks an LLM which national priorities an idea serves.
///
/// The whole request is bounded by `timeout`; a timeout is reported as an error
/// and the categorization engine treats it like any other fallback failure.
pub struct AiPrioritySuggester {
    ai: Arc<dyn BaseAI>,
    timeout: Duration,
}

impl AiPrioritySuggester {
    pub fn new(ai: Arc<dyn BaseAI>, timeout: Duration) -> Self {
        Self { ai, timeout }
    }
}

#[async_trait]
impl BasePrioritySuggester for AiPrioritySuggester {
    async fn suggest_priorities(
        &self,
        problem: &str,
        solution: &str,
        category: &str,
    ) -> Result<Vec<String>> {
        let prompt = build_prompt(problem, solution, category);

        let raw = tokio::time::timeout(self.timeout, self.ai.complete_json(&prompt))
            .await
            .with_context(|| format!("Priority suggestion timed out after {:?}", self.timeout))?
            .context("Priority suggestion request failed")?;

        debug!(response_length = raw.len(), "AI priority suggestion received");

        parse_priority_codes(&raw)
    }
}

fn build_prompt(problem: &str, solution: &str, category: &str) -> String {
    let codes = MoroccanPriority::ALL
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You classify citizen ideas from Morocco against national development priorities.\n\
         Allowed codes: {codes}\n\
         Return a JSON object of the form {{\"priorities\": [..]}} holding at most 3 of the \
         allowed codes, most relevant first. Use an empty list if none apply. No prose.\n\n\
         Problem: {problem}\n\
         Solution: {solution}\n\
         Category: {category}"
    )
}

/// Parse the model output as a list of strings.
///
/// Accepts `{"priorities": [...]}`, any object with an array-valued field
/// (JSON mode replies with an object but may pick its own key), or a bare
/// array. Markdown code fences are stripped.
pub fn parse_priority_codes(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    let value: serde_json::Value =
        serde_json::from_str(trimmed).context("AI response was not valid JSON")?;

    let array = match &value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(map) => map
            .get("priorities")
            .and_then(|v| v.as_array())
            .or_else(|| map.values().find_map(|v| v.as_array()))
            .context("AI response object has no array field")?,
        _ => anyhow::bail!("AI response was neither an array nor an object"),
    };

    Ok(array
        .iter()
        .filter_map(|v| v.as_str().map(|s| s.to_string()))
        .collect())
}
