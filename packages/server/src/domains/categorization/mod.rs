//! Categorization domain - maps idea text to national priorities, budget tier,
//! location type, complexity and SDG alignment.
//!
//! `utils` holds the pure rules, `actions` wires them to the optional AI
//! fallback, and `reference` holds the lookup tables.

pub mod actions;
pub mod ai_fallback;
pub mod models;
pub mod reference;
pub mod utils;

pub use actions::{auto_categorize_idea, categorize_stored_idea, CategorizeInput, StoredCategorization};
pub use ai_fallback::AiPrioritySuggester;
pub use models::{BudgetTier, CategoryTags, Complexity, LocationType, MoroccanPriority, SdgAlignment};
