//! # Timesift Domain
//!
//! Business domain types and models for Timesift.
//!
//! This crate contains:
//! - Activity record and report data types
//! - Category and productivity rule models
//! - Domain error types and Result definitions
//! - Domain constants and pure helpers
//!
//! ## Architecture
//! - No dependencies on other Timesift crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
// Re-export URL helpers used by the rule and report engines
pub use utils::url::parse_domain;
