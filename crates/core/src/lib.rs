//! # Timesift Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The merge engine and duration report builder
//! - The category mapper with its built-in rule set
//! - The activity rule engine and its service
//! - Port/adapter interfaces (traits) for the collaborators
//!
//! ## Architecture Principles
//! - Only depends on `timesift-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod aggregation;
pub mod classification;
pub mod rules;

// Re-export specific items to avoid ambiguity
pub use aggregation::merge::merge;
pub use aggregation::report::{
    build_application_report, build_domain_report, build_duration_report, build_title_report,
    DimensionDurationReport,
};
pub use classification::defaults::default_rules;
pub use classification::mapper::{build_category_tree, classify, normalize_percentages};
pub use classification::ports::{load_rules, CategoryRuleSource};
pub use rules::matcher::{find_matching_activities, match_rule};
pub use rules::ports::{RatingStore, RuleRepository};
pub use rules::service::RuleService;
