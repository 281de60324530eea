//! Port interfaces for the activity rule engine

use async_trait::async_trait;
use timesift_domain::{ActivityRule, Rating, Result};

/// Trait for the rule-storage collaborator.
#[async_trait]
pub trait RuleRepository: Send + Sync {
    /// Fetch a rule by id, `None` when absent.
    async fn get_rule(&self, id: &str) -> Result<Option<ActivityRule>>;

    /// List all active rules, in the user's configured order.
    async fn list_active_rules(&self) -> Result<Vec<ActivityRule>>;

    /// Persist a new rule. All-or-nothing.
    async fn insert_rule(&self, rule: &ActivityRule) -> Result<()>;

    /// Replace an existing rule. All-or-nothing; fails with
    /// [`timesift_domain::TimesiftError::NotFound`] when the id is absent.
    async fn update_rule(&self, rule: &ActivityRule) -> Result<()>;

    /// Delete a rule by id.
    async fn delete_rule(&self, id: &str) -> Result<()>;
}

/// Trait for the persistence collaborator storing per-activity ratings.
///
/// Updates are keyed on the activity's timestamp and are idempotent:
/// writing the same rating twice is a no-op, and concurrent writers
/// resolve last-write-wins.
#[async_trait]
pub trait RatingStore: Send + Sync {
    /// Assign a rating to the activity with the given timestamp, optionally
    /// attributing the rule that produced it.
    async fn set_activity_rating(
        &self,
        timestamp: i64,
        rating: Rating,
        rule_id: Option<String>,
    ) -> Result<()>;
}
