// HTTP routes
pub mod categorize;
pub mod health;
pub mod match_diaspora;

pub use categorize::*;
pub use health::*;
pub use match_diaspora::*;
