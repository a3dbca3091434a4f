pub mod auto_categorize;
pub mod categorize_stored;

pub use auto_categorize::{auto_categorize_idea, sanitize_suggestions, CategorizeInput};
pub use categorize_stored::{categorize_stored_idea, StoredCategorization};
