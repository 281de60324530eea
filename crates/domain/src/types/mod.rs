//! Domain data types
//!
//! All types that cross the engine's boundaries: capture-collaborator wire
//! shapes, category rules and trees, productivity rules, and report rollups.

pub mod activity;
pub mod category;
pub mod reports;
pub mod rules;

pub use activity::{validate_records, ActivityRecord, MergedActivityRecord};
pub use category::{CategoryDurationReport, CategoryRule, CategoryRuleConfig, TimeInstance};
pub use reports::{
    ApplicationDurationReport, DomainDurationReport, ReportDimension, ReportWindow,
    TitleDurationReport,
};
pub use rules::{
    ActivityRule, Rating, RatingChangeConfirmation, RatingFailure, RuleApplication, RuleCondition,
    RuleType,
};
