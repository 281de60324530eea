//! Activity record model
//!
//! The shared data shape flowing through every engine. Records arrive from
//! the capture collaborator once per tick and are immutable inputs; merged
//! records and all reports are derived from them per query.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TimesiftError};

/// One accounted slice of foreground-activity time.
///
/// Field names on the wire are camelCase, matching the capture
/// collaborator's JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// OS identifier tag (e.g. "darwin", "win32")
    pub platform: String,

    /// Opaque integer identifying the app/window instance
    pub activity_id: i64,

    /// Window title at capture time
    pub title: String,

    /// Filesystem/bundle path of the owning application
    pub owner_path: String,

    /// Process id of the owning application
    pub owner_process_id: i64,

    /// Bundle identifier, when the platform has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_bundle_id: Option<String>,

    /// Human-facing application name
    pub owner_name: String,

    /// Page URL, present only for browser activity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Start of this slice (epoch milliseconds)
    pub timestamp: i64,

    /// Whole seconds accounted by this slice, >= 0
    pub duration: i64,
}

/// Consolidated record produced by the merge engine.
///
/// Same shape as [`ActivityRecord`]; `duration` is the sum of the merged
/// constituents while `timestamp`, `title` and the owner fields come from
/// the first constituent of the run.
pub type MergedActivityRecord = ActivityRecord;

/// Boundary validation for a batch of captured records.
///
/// Runs before any merge or aggregation pass. Rejects slices the engines
/// would silently mis-account: negative durations and negative timestamps.
/// Monotonicity of timestamps is a contract on the capture collaborator and
/// is deliberately not checked here (see the merge engine docs).
///
/// # Errors
///
/// Returns [`TimesiftError::Validation`] naming the first offending record.
pub fn validate_records(records: &[ActivityRecord]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        if record.duration < 0 {
            return Err(TimesiftError::Validation(format!(
                "record {index} has negative duration {}",
                record.duration
            )));
        }
        if record.timestamp < 0 {
            return Err(TimesiftError::Validation(format!(
                "record {index} has negative timestamp {}",
                record.timestamp
            )));
        }
        if record.owner_name.is_empty() {
            return Err(TimesiftError::Validation(format!("record {index} has empty ownerName")));
        }
    }
    Ok(())
}
