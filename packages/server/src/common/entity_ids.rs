//! Typed ID definitions for the domain entities.
//!
//! ```rust,ignore
//! use fikra_core::common::{IdeaId, ProfileId};
//!
//! let idea_id = IdeaId::new();
//! // let wrong: ProfileId = idea_id; // compile error
//! ```

pub use super::id::Id;

/// Marker type for submitted ideas.
pub struct Idea;

/// Marker type for diaspora mentor profiles.
pub struct DiasporaProfile;

/// Typed ID for Idea entities.
pub type IdeaId = Id<Idea>;

/// Typed ID for DiasporaProfile entities.
pub type ProfileId = Id<DiasporaProfile>;
