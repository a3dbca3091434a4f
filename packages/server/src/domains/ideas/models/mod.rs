pub mod diaspora_profile;
pub mod idea;

pub use diaspora_profile::DiasporaProfile;
pub use idea::{Idea, IdeaStatus};
