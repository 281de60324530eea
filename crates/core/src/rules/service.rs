//! Activity rule service - core business logic

use std::sync::Arc;

use timesift_domain::{
    ActivityRecord, ActivityRule, RatingChangeConfirmation, RatingFailure, Result,
    RuleApplication, TimesiftError,
};
use tracing::{info, warn};

use super::matcher::find_matching_activities;
use super::ports::{RatingStore, RuleRepository};

/// Activity rule service
///
/// Owns the create/update/delete flow for productivity rules and the
/// retroactive re-rating that follows each mutation. The single-rule
/// mutation is all-or-nothing through the repository port; the bulk
/// re-rating afterwards is explicitly not transactional (see
/// [`RuleApplication`]).
pub struct RuleService {
    rules: Arc<dyn RuleRepository>,
    ratings: Arc<dyn RatingStore>,
}

impl RuleService {
    /// Create a new rule service
    pub fn new(rules: Arc<dyn RuleRepository>, ratings: Arc<dyn RatingStore>) -> Self {
        Self { rules, ratings }
    }

    /// Create a rule and retroactively rate the candidate set.
    ///
    /// Candidates are caller-supplied - typically only currently-unrated
    /// activities.
    ///
    /// # Errors
    ///
    /// [`TimesiftError::Validation`] when the rule is malformed; storage
    /// errors from the repository. Bulk re-rating failures do not fail the
    /// call; they land in [`RuleApplication::failed`].
    pub async fn create_rule(
        &self,
        rule: ActivityRule,
        candidates: &[ActivityRecord],
    ) -> Result<RuleApplication> {
        rule.validate()?;
        self.rules.insert_rule(&rule).await?;

        let application = self.apply_rule_to(&rule, candidates).await;
        info!(
            rule_id = %rule.id,
            applied = application.applied.len(),
            failed = application.failed.len(),
            "created rule and applied ratings"
        );
        Ok(application)
    }

    /// Update a rule and retroactively re-rate the candidate set.
    ///
    /// Changing the stored rule's rating requires an explicit
    /// [`RatingChangeConfirmation`]; without one the call fails before any
    /// write. The confirmation's `apply_to_all` flag is the caller's cue to
    /// widen the candidate set to all historical instances - nothing is
    /// silently re-rated.
    ///
    /// # Errors
    ///
    /// [`TimesiftError::NotFound`] when the rule id is absent,
    /// [`TimesiftError::Conflict`] when a rating change lacks confirmation,
    /// [`TimesiftError::Validation`] when the rule is malformed.
    pub async fn update_rule(
        &self,
        rule: ActivityRule,
        candidates: &[ActivityRecord],
        confirmation: Option<RatingChangeConfirmation>,
    ) -> Result<RuleApplication> {
        rule.validate()?;

        let existing = self
            .rules
            .get_rule(&rule.id)
            .await?
            .ok_or_else(|| TimesiftError::NotFound(format!("rule {}", rule.id)))?;

        if existing.rating != rule.rating && confirmation.is_none() {
            return Err(TimesiftError::Conflict(format!(
                "changing the rating of rule {} requires user confirmation",
                rule.id
            )));
        }

        self.rules.update_rule(&rule).await?;

        let application = self.apply_rule_to(&rule, candidates).await;
        info!(
            rule_id = %rule.id,
            applied = application.applied.len(),
            failed = application.failed.len(),
            apply_to_all = confirmation.is_some_and(|c| c.apply_to_all),
            "updated rule and applied ratings"
        );
        Ok(application)
    }

    /// Delete a rule.
    ///
    /// # Errors
    ///
    /// [`TimesiftError::NotFound`] when the rule id is absent.
    pub async fn delete_rule(&self, id: &str) -> Result<()> {
        self.rules
            .get_rule(id)
            .await?
            .ok_or_else(|| TimesiftError::NotFound(format!("rule {id}")))?;
        self.rules.delete_rule(id).await
    }

    /// Retroactively apply a rule to a candidate set.
    ///
    /// One independent rating call per matched activity, no cross-call
    /// lock. Failures are collected rather than aborting the batch -
    /// already-applied updates stay in effect and retrying the failed set
    /// is safe since each update is idempotent by timestamp key.
    pub async fn apply_rule_to(
        &self,
        rule: &ActivityRule,
        candidates: &[ActivityRecord],
    ) -> RuleApplication {
        let mut application = RuleApplication::default();

        for activity in find_matching_activities(candidates, rule) {
            match self
                .ratings
                .set_activity_rating(activity.timestamp, rule.rating, Some(rule.id.clone()))
                .await
            {
                Ok(()) => application.applied.push(activity.timestamp),
                Err(err) => {
                    warn!(
                        rule_id = %rule.id,
                        timestamp = activity.timestamp,
                        error = %err,
                        "failed to apply rating, continuing batch"
                    );
                    application.failed.push(RatingFailure {
                        timestamp: activity.timestamp,
                        error: err.to_string(),
                    });
                }
            }
        }

        application
    }
}
