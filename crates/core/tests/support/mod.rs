//! Mock port implementations for testing
//!
//! Provides in-memory mocks for the collaborator ports, enabling
//! deterministic tests without storage dependencies.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use timesift_core::{CategoryRuleSource, RatingStore, RuleRepository};
use timesift_domain::{
    ActivityRecord, ActivityRule, CategoryRuleConfig, Rating, Result as DomainResult,
    TimesiftError,
};

/// In-memory mock for `RuleRepository`.
///
/// Stores rules in a map keyed by id. `update_rule` and `delete_rule`
/// report `NotFound` for absent ids, matching the storage collaborator.
#[derive(Default)]
pub struct MockRuleRepository {
    rules: Mutex<HashMap<String, ActivityRule>>,
}

impl MockRuleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper seeding the mock with a rule.
    pub fn with_rule(self, rule: ActivityRule) -> Self {
        self.rules.lock().unwrap().insert(rule.id.clone(), rule);
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.lock().unwrap().contains_key(id)
    }

    pub fn stored(&self, id: &str) -> Option<ActivityRule> {
        self.rules.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl RuleRepository for MockRuleRepository {
    async fn get_rule(&self, id: &str) -> DomainResult<Option<ActivityRule>> {
        Ok(self.rules.lock().unwrap().get(id).cloned())
    }

    async fn list_active_rules(&self) -> DomainResult<Vec<ActivityRule>> {
        Ok(self.rules.lock().unwrap().values().filter(|r| r.active).cloned().collect())
    }

    async fn insert_rule(&self, rule: &ActivityRule) -> DomainResult<()> {
        self.rules.lock().unwrap().insert(rule.id.clone(), rule.clone());
        Ok(())
    }

    async fn update_rule(&self, rule: &ActivityRule) -> DomainResult<()> {
        let mut rules = self.rules.lock().unwrap();
        if !rules.contains_key(&rule.id) {
            return Err(TimesiftError::NotFound(format!("rule {}", rule.id)));
        }
        rules.insert(rule.id.clone(), rule.clone());
        Ok(())
    }

    async fn delete_rule(&self, id: &str) -> DomainResult<()> {
        if self.rules.lock().unwrap().remove(id).is_none() {
            return Err(TimesiftError::NotFound(format!("rule {id}")));
        }
        Ok(())
    }
}

/// In-memory mock for `RatingStore`.
///
/// Records every successful rating assignment and fails updates for
/// timestamps in the injected failure set, so partial-batch behavior is
/// observable.
#[derive(Default)]
pub struct MockRatingStore {
    assignments: Mutex<Vec<(i64, Rating, Option<String>)>>,
    failing_timestamps: HashSet<i64>,
}

impl MockRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make updates for the given timestamps fail with a storage error.
    pub fn failing_for(timestamps: impl IntoIterator<Item = i64>) -> Self {
        Self {
            assignments: Mutex::new(Vec::new()),
            failing_timestamps: timestamps.into_iter().collect(),
        }
    }

    pub fn assignments(&self) -> Vec<(i64, Rating, Option<String>)> {
        self.assignments.lock().unwrap().clone()
    }
}

#[async_trait]
impl RatingStore for MockRatingStore {
    async fn set_activity_rating(
        &self,
        timestamp: i64,
        rating: Rating,
        rule_id: Option<String>,
    ) -> DomainResult<()> {
        if self.failing_timestamps.contains(&timestamp) {
            return Err(TimesiftError::Storage(format!(
                "simulated write failure for {timestamp}"
            )));
        }
        self.assignments.lock().unwrap().push((timestamp, rating, rule_id));
        Ok(())
    }
}

/// In-memory mock for `CategoryRuleSource`.
#[derive(Default)]
pub struct MockCategoryRuleSource {
    configs: Vec<CategoryRuleConfig>,
}

impl MockCategoryRuleSource {
    pub fn new(configs: Vec<CategoryRuleConfig>) -> Self {
        Self { configs }
    }
}

#[async_trait]
impl CategoryRuleSource for MockCategoryRuleSource {
    async fn custom_rules(&self) -> DomainResult<Vec<CategoryRuleConfig>> {
        Ok(self.configs.clone())
    }
}

/// Build an activity record with the fields the engines care about.
pub fn create_test_activity(
    activity_id: i64,
    owner_name: &str,
    title: &str,
    url: Option<&str>,
    timestamp: i64,
    duration: i64,
) -> ActivityRecord {
    ActivityRecord {
        platform: "darwin".to_string(),
        activity_id,
        title: title.to_string(),
        owner_path: format!("/Applications/{owner_name}.app"),
        owner_process_id: 100 + activity_id,
        owner_bundle_id: None,
        owner_name: owner_name.to_string(),
        url: url.map(str::to_string),
        timestamp,
        duration,
    }
}
