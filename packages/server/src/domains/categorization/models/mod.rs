pub mod priority;
pub mod tags;

pub use priority::MoroccanPriority;
pub use tags::{BudgetTier, CategoryTags, Complexity, LocationType, SdgAlignment};
