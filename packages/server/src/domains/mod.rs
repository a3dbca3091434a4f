// Business domains
pub mod categorization;
pub mod ideas;
pub mod matching;
