//! Server dependencies for route handlers (using traits for testability)
//!
//! Handlers only see trait objects, so tests can swap in the in-memory store
//! and a mock suggester.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{BaseIdeaStore, BasePrioritySuggester};

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    /// Present in production; health checks ping it
    pub db_pool: Option<PgPool>,
    pub idea_store: Arc<dyn BaseIdeaStore>,
    /// AI fallback for categorization. `None` when no API key is configured.
    pub priority_suggester: Option<Arc<dyn BasePrioritySuggester>>,
}

impl ServerDeps {
    pub fn new(
        db_pool: Option<PgPool>,
        idea_store: Arc<dyn BaseIdeaStore>,
        priority_suggester: Option<Arc<dyn BasePrioritySuggester>>,
    ) -> Self {
        Self {
            db_pool,
            idea_store,
            priority_suggester,
        }
    }
}
