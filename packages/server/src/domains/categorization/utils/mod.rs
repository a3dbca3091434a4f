//! Pure categorization rules - no I/O, never fail.

pub mod budget;
pub mod complexity;
pub mod location;
pub mod priorities;
pub mod sdg;

pub use budget::{map_budget_tier, parse_cost_estimate, CostEstimate};
pub use complexity::determine_complexity;
pub use location::determine_location_type;
pub use priorities::{
    detect_priorities, detect_priorities_explained, DetectionRule, PriorityDetection,
    MAX_PRIORITIES,
};
pub use sdg::{map_priorities_to_sdgs, MAX_SDG_TAGS};
