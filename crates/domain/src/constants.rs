//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine.

/// Maximum silence between two same-activity observations for them to still
/// fold into one continuous block (15 minutes, epoch milliseconds).
pub const MERGE_GAP_THRESHOLD_MS: i64 = 900_000;

/// Duration credited to every category-tree node per classified record.
///
/// The classifier credits a flat second per (path level, record) pair
/// instead of the record's accounted duration. Category totals are
/// therefore sample counts scaled by a second, not tracked time. See
/// DESIGN.md before changing.
pub const CATEGORY_INSTANCE_DURATION_MS: i64 = 1000;

/// Category assigned to records no rule matches.
pub const UNCATEGORIZED_CATEGORY: &str = "Uncategorized";

/// Milliseconds in one day, for day-sized report windows.
pub const DAY_MS: i64 = 86_400_000;
