//! Matching domain - ranks diaspora mentors for an idea
//!
//! `utils::scoring` holds the weighted factors, `actions` ranks and writes
//! results back through `BaseIdeaStore`.

pub mod actions;
pub mod models;
pub mod reference;
pub mod utils;

pub use actions::{match_idea, match_idea_to_profiles, record_match_outcome, MatchOutcome};
pub use models::{IdeaForMatching, MatchReasoning, MatchResult, MentorProfile};
