//! Ideas domain - persisted ideas and the diaspora profiles they are matched to

pub mod models;

pub use models::{DiasporaProfile, Idea, IdeaStatus};
