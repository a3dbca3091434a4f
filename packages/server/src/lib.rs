// Fikra Labs - API Core
//
// Rule-based categorization of submitted ideas and diaspora mentor matching.
// Pure rules live in domains/*/utils, infrastructure behind kernel traits.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
