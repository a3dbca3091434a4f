// TestDependencies - mock implementations for testing
//
// Provides in-memory and mock services that can be injected into ServerDeps
// for unit and integration tests without Postgres or OpenAI.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{BaseAI, BaseIdeaStore, BasePrioritySuggester, ServerDeps};
use crate::common::{IdeaId, ProfileId};
use crate::domains::categorization::models::CategoryTags;
use crate::domains::ideas::models::{Idea, IdeaStatus};
use crate::domains::matching::models::MentorProfile;

// =============================================================================
// Mock AI (Generic LLM capabilities)
// =============================================================================

pub struct MockAI {
    responses: Arc<Mutex<Vec<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
    error: Option<String>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
            error: None,
        }
    }

    /// Add a text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Sleep before answering (for timeout tests)
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail every call with the given message
    pub fn failing(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = &self.error {
            anyhow::bail!("{}", message);
        }

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            Ok(responses.remove(0))
        } else {
            Ok("[]".to_string())
        }
    }
}

// =============================================================================
// Mock Priority Suggester
// =============================================================================

pub struct MockPrioritySuggester {
    codes: Vec<String>,
    error: Option<String>,
    calls: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl MockPrioritySuggester {
    pub fn new() -> Self {
        Self {
            codes: Vec::new(),
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Codes returned on every call
    pub fn with_codes(mut self, codes: &[&str]) -> Self {
        self.codes = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Fail every call with the given message
    pub fn failing(mut self, message: &str) -> Self {
        self.error = Some(message.to_string());
        self
    }

    /// (problem, solution, category) for every call
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockPrioritySuggester {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BasePrioritySuggester for MockPrioritySuggester {
    async fn suggest_priorities(
        &self,
        problem: &str,
        solution: &str,
        category: &str,
    ) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push((
            problem.to_string(),
            solution.to_string(),
            category.to_string(),
        ));

        match &self.error {
            Some(message) => anyhow::bail!("{}", message),
            None => Ok(self.codes.clone()),
        }
    }
}

// =============================================================================
// In-memory Idea Store
// =============================================================================

/// `BaseIdeaStore` backed by a HashMap. Profiles keep insertion order.
pub struct InMemoryIdeaStore {
    ideas: Arc<Mutex<HashMap<IdeaId, Idea>>>,
    profiles: Arc<Mutex<Vec<MentorProfile>>>,
    fail_writes: bool,
    fail_match_writes: bool,
    fail_reads: bool,
}

impl InMemoryIdeaStore {
    pub fn new() -> Self {
        Self {
            ideas: Arc::new(Mutex::new(HashMap::new())),
            profiles: Arc::new(Mutex::new(Vec::new())),
            fail_writes: false,
            fail_match_writes: false,
            fail_reads: false,
        }
    }

    pub fn with_idea(self, idea: Idea) -> Self {
        self.ideas.lock().unwrap().insert(idea.id, idea);
        self
    }

    pub fn with_profile(self, profile: MentorProfile) -> Self {
        self.profiles.lock().unwrap().push(profile);
        self
    }

    /// Every write returns an error (reads still work)
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Only `record_matches` returns an error
    pub fn failing_match_writes(mut self) -> Self {
        self.fail_match_writes = true;
        self
    }

    /// Every read returns an error
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Snapshot of a stored idea
    pub fn idea(&self, id: IdeaId) -> Option<Idea> {
        self.ideas.lock().unwrap().get(&id).cloned()
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes {
            anyhow::bail!("simulated write failure");
        }
        Ok(())
    }

    fn transition(&self, id: IdeaId, from: IdeaStatus, to: IdeaStatus) -> Result<bool> {
        self.check_write()?;
        let mut ideas = self.ideas.lock().unwrap();
        match ideas.get_mut(&id) {
            Some(idea) if idea.status() == Some(from) => {
                idea.status = to.to_string();
                idea.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads {
            anyhow::bail!("simulated read failure");
        }
        Ok(())
    }
}

impl Default for InMemoryIdeaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIdeaStore for InMemoryIdeaStore {
    async fn find_idea(&self, id: IdeaId) -> Result<Option<Idea>> {
        self.check_read()?;
        Ok(self.idea(id))
    }

    async fn save_category_tags(&self, id: IdeaId, tags: &CategoryTags) -> Result<()> {
        self.check_write()?;
        let mut ideas = self.ideas.lock().unwrap();
        let idea = ideas
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("Idea not found: {}", id))?;
        idea.apply_category_tags(tags);
        Ok(())
    }

    async fn list_mentor_candidates(&self) -> Result<Vec<MentorProfile>> {
        self.check_read()?;
        Ok(self.profiles.lock().unwrap().clone())
    }

    async fn record_matches(
        &self,
        id: IdeaId,
        profile_ids: &[ProfileId],
        top_score: u8,
    ) -> Result<()> {
        self.check_write()?;
        if self.fail_match_writes {
            anyhow::bail!("simulated match write failure");
        }
        let mut ideas = self.ideas.lock().unwrap();
        let idea = ideas
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("Idea not found: {}", id))?;
        idea.matched_diaspora = Some(profile_ids.to_vec());
        idea.top_match_score = Some(i32::from(top_score));
        idea.updated_at = Utc::now();
        Ok(())
    }

    async fn mark_analyzed_if_submitted(&self, id: IdeaId) -> Result<bool> {
        self.transition(id, IdeaStatus::Submitted, IdeaStatus::Analyzed)
    }

    async fn mark_matched_if_analyzed(&self, id: IdeaId) -> Result<bool> {
        self.transition(id, IdeaStatus::Analyzed, IdeaStatus::Matched)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Builder for `ServerDeps` wired to in-memory collaborators.
pub struct TestDependencies {
    pub store: Arc<InMemoryIdeaStore>,
    pub suggester: Option<Arc<MockPrioritySuggester>>,
}

impl TestDependencies {
    pub fn new(store: InMemoryIdeaStore) -> Self {
        Self {
            store: Arc::new(store),
            suggester: None,
        }
    }

    pub fn with_suggester(mut self, suggester: MockPrioritySuggester) -> Self {
        self.suggester = Some(Arc::new(suggester));
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps {
            db_pool: None,
            idea_store: self.store.clone(),
            priority_suggester: self
                .suggester
                .clone()
                .map(|s| s as Arc<dyn BasePrioritySuggester>),
        }
    }
}
