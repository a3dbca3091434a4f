pub mod rank;
pub mod record_outcome;

pub use rank::match_idea_to_profiles;
pub use record_outcome::{match_idea, record_match_outcome, MatchOutcome};
