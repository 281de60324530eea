//! Category rule and category tree types

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, TimesiftError};

/// A single classification rule: matchers plus the category path it assigns.
///
/// A rule matches when **any** of its defined matchers holds; matchers are
/// OR-combined, not AND-combined (see DESIGN.md). Rules are evaluated in
/// list order; the first match wins.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    /// Ordered category path, root to leaf (e.g. `["Work", "Programming"]`)
    pub category: Vec<String>,

    /// Substring matched case-insensitively against the record's `ownerName`
    pub application: Option<String>,

    /// Regular expression tested against the record's `title`
    pub title: Option<Regex>,

    /// Substring matched against the record's raw `url`
    pub domain: Option<String>,
}

/// Serde-facing shape for a [`CategoryRule`].
///
/// The configuration collaborator supplies rules in this form; `title` is a
/// regex pattern string compiled at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRuleConfig {
    /// Ordered category path, root to leaf
    pub category: Vec<String>,

    /// Substring matched case-insensitively against `ownerName`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    /// Regex pattern tested against `title`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Substring matched against the raw `url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl CategoryRuleConfig {
    /// Compile this configuration entry into a runtime [`CategoryRule`].
    ///
    /// # Errors
    ///
    /// Returns [`TimesiftError::Validation`] when the category path is empty
    /// or the `title` pattern is not a valid regular expression.
    pub fn compile(&self) -> Result<CategoryRule> {
        if self.category.is_empty() {
            return Err(TimesiftError::Validation("category rule has empty path".to_string()));
        }

        let title = match &self.title {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                TimesiftError::Validation(format!("invalid title pattern {pattern:?}: {e}"))
            })?),
            None => None,
        };

        Ok(CategoryRule {
            category: self.category.clone(),
            application: self.application.clone(),
            title,
            domain: self.domain.clone(),
        })
    }
}

/// One instance entry attached to a report node or dimension rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInstance {
    /// Instance start (epoch milliseconds)
    pub start_time: i64,

    /// Instance end (epoch milliseconds)
    pub end_time: i64,

    /// Accounted duration for this instance (report-specific unit)
    pub duration: i64,
}

/// One node of the category duration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDurationReport {
    /// Path from the root to this node
    pub category: Vec<String>,

    /// Total duration accounted at this node (milliseconds)
    pub total_duration: i64,

    /// Share of this node within its sibling group (0-100)
    pub percentage: f64,

    /// Child nodes, one per sub-category seen under this path
    pub children: Vec<CategoryDurationReport>,

    /// Per-record instances accounted at this level
    pub instances: Vec<TimeInstance>,
}
