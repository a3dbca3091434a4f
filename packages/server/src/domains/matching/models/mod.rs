pub mod match_result;
pub mod profile;

pub use match_result::{MatchReasoning, MatchResult};
pub use profile::{IdeaForMatching, MentorProfile};
