//! Dimension report types
//!
//! Duration rollups grouped by one axis (application, domain, or title)
//! over a half-open time window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DAY_MS;
use crate::types::category::TimeInstance;

/// Half-open query window `[start, end)` in epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// Inclusive window start (epoch milliseconds)
    pub start: i64,

    /// Exclusive window end (epoch milliseconds)
    pub end: i64,
}

impl ReportWindow {
    /// Create a window from explicit bounds.
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window covering one whole UTC day.
    #[must_use]
    pub fn for_day(date: NaiveDate) -> Self {
        let start = date.and_hms_opt(0, 0, 0).map_or(0, |dt| dt.and_utc().timestamp_millis());
        Self { start, end: start + DAY_MS }
    }

    /// Whether a timestamp falls inside the window.
    #[must_use]
    pub const fn contains(&self, timestamp: i64) -> bool {
        timestamp >= self.start && timestamp < self.end
    }
}

/// Grouping axis for a dimension report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportDimension {
    /// Group by the application's `ownerName`
    Application,
    /// Group by the hostname parsed from `url`
    Domain,
    /// Group by window `title`
    Title,
}

/// Duration rollup for one application over the queried window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDurationReport {
    /// Application `ownerName`
    pub name: String,

    /// Summed duration across the group (seconds, accounting total)
    pub total_duration: i64,

    /// Share of the grand total (0-100)
    pub percentage: f64,

    /// Constituent record instances
    pub instances: Vec<TimeInstance>,
}

/// Duration rollup for one web domain over the queried window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDurationReport {
    /// Hostname parsed from the records' URLs
    pub domain: String,

    /// Summed duration across the group (seconds, accounting total)
    pub total_duration: i64,

    /// Share of the grand total (0-100)
    pub percentage: f64,

    /// Constituent record instances
    pub instances: Vec<TimeInstance>,
}

/// Duration rollup for one window title over the queried window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDurationReport {
    /// Window title
    pub title: String,

    /// Summed duration across the group (seconds, accounting total)
    pub total_duration: i64,

    /// Share of the grand total (0-100)
    pub percentage: f64,

    /// Constituent record instances
    pub instances: Vec<TimeInstance>,
}
