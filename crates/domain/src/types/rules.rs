//! User-authored productivity rules
//!
//! Rules assign a binary productivity rating to activities. They are stored
//! by the rule-storage collaborator and read by the rule engine as plain
//! data; the wire tokens below match what the rule editor persists.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, TimesiftError};
use crate::impl_domain_token_conversions;

/// Which activity field a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Compare against the accounted duration (seconds)
    Duration,
    /// Compare against the application's `ownerName`
    AppName,
    /// Compare against the hostname parsed from `url`
    Domain,
    /// Compare against the window `title`
    Title,
    /// Compare against the raw `url`
    Url,
}

impl_domain_token_conversions!(RuleType {
    Duration => "duration",
    AppName => "app_name",
    Domain => "domain",
    Title => "title",
    Url => "url",
});

/// Comparison operator carried by a rule.
///
/// Numeric operators apply to `duration` rules, string operators to the
/// rest; `=` is shared. A condition applied to the wrong rule type is inert
/// rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleCondition {
    /// Exact match (string) or numeric equality (duration)
    #[serde(rename = "=")]
    Equals,
    /// Substring match
    #[serde(rename = "contains")]
    Contains,
    /// Prefix match
    #[serde(rename = "startsWith")]
    StartsWith,
    /// Suffix match
    #[serde(rename = "endsWith")]
    EndsWith,
    /// Numeric greater-than
    #[serde(rename = ">")]
    GreaterThan,
    /// Numeric less-than
    #[serde(rename = "<")]
    LessThan,
    /// Numeric greater-or-equal
    #[serde(rename = ">=")]
    GreaterOrEqual,
    /// Numeric less-or-equal
    #[serde(rename = "<=")]
    LessOrEqual,
}

impl RuleCondition {
    /// Whether this condition is usable with the given rule type.
    #[must_use]
    pub const fn applies_to(self, rule_type: RuleType) -> bool {
        match self {
            Self::Equals => true,
            Self::Contains | Self::StartsWith | Self::EndsWith => {
                !matches!(rule_type, RuleType::Duration)
            }
            Self::GreaterThan | Self::LessThan | Self::GreaterOrEqual | Self::LessOrEqual => {
                matches!(rule_type, RuleType::Duration)
            }
        }
    }
}

/// Binary productivity rating attached to an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rating {
    /// Time the user considers distracting
    Distracting,
    /// Time the user considers productive
    Productive,
}

impl_domain_token_conversions!(Rating {
    Distracting => "distracting",
    Productive => "productive",
});

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        match rating {
            Rating::Distracting => 0,
            Rating::Productive => 1,
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Distracting),
            1 => Ok(Self::Productive),
            other => Err(format!("Invalid Rating: {other}")),
        }
    }
}

/// A user-authored productivity rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRule {
    /// Stable rule identifier
    pub id: String,

    /// Display name shown in the rule editor
    pub name: String,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Which activity field the rule inspects
    pub rule_type: RuleType,

    /// Comparison operator
    pub condition: RuleCondition,

    /// Comparison value; parsed numerically for duration rules
    pub value: String,

    /// Rating assigned to matching activities
    pub rating: Rating,

    /// Inactive rules never match
    pub active: bool,
}

impl ActivityRule {
    /// Create a new active rule with a freshly minted id.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        rule_type: RuleType,
        condition: RuleCondition,
        value: impl Into<String>,
        rating: Rating,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: None,
            rule_type,
            condition,
            value: value.into(),
            rating,
            active: true,
        }
    }

    /// Boundary validation for a rule about to be persisted.
    ///
    /// Legacy storage may still hold rules that fail these checks; the
    /// matcher treats those as inert instead of erroring.
    ///
    /// # Errors
    ///
    /// Returns [`TimesiftError::Validation`] when the name or value is
    /// empty, the condition does not apply to the rule type, or a duration
    /// rule's value does not parse as a number.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TimesiftError::Validation("rule name must not be empty".to_string()));
        }
        if self.value.is_empty() {
            return Err(TimesiftError::Validation("rule value must not be empty".to_string()));
        }
        if !self.condition.applies_to(self.rule_type) {
            return Err(TimesiftError::Validation(format!(
                "condition {:?} does not apply to rule type {}",
                self.condition, self.rule_type
            )));
        }
        if self.rule_type == RuleType::Duration && self.value.parse::<f64>().is_err() {
            return Err(TimesiftError::Validation(format!(
                "duration rule value {:?} is not numeric",
                self.value
            )));
        }
        Ok(())
    }
}

/// Outcome of retroactively applying a rule to a candidate set.
///
/// The bulk re-rating that follows a rule create/update is not
/// transactional: each matched activity's rating update is an independent
/// call. Already-applied updates remain in effect when later ones fail;
/// each update is idempotent by timestamp key, so retrying the failed set
/// is safe (at-least-once semantics).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleApplication {
    /// Timestamps of activities whose rating was assigned
    pub applied: Vec<i64>,

    /// Updates that failed, with the collaborator's error text
    pub failed: Vec<RatingFailure>,
}

/// One failed rating update within a bulk application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingFailure {
    /// Timestamp key of the activity that failed to update
    pub timestamp: i64,

    /// Error reported by the rating store
    pub error: String,
}

/// Explicit user confirmation for a rating change on an existing rule.
///
/// Changing a stored rule's rating is gated behind this confirmation before
/// any retroactive re-rating proceeds; nothing is silently re-rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingChangeConfirmation {
    /// Whether the user opted in to re-rating all historical instances
    /// (the caller widens the candidate set accordingly)
    pub apply_to_all: bool,
}
