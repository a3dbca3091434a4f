//! Pure scoring functions - no I/O, never fail.

pub mod scoring;

pub use scoring::{
    score_expertise, score_location, score_profile, score_skills, score_willingness, FactorScore,
};
