//! Port interfaces for category classification

use async_trait::async_trait;
use timesift_domain::{CategoryRule, CategoryRuleConfig, Result};

use crate::classification::defaults::default_rules;

/// Trait for the configuration collaborator supplying custom category rules.
///
/// Custom rules are appended after the built-in defaults, so a custom rule
/// can only classify records the defaults leave uncategorized or extend
/// the taxonomy with new paths.
#[async_trait]
pub trait CategoryRuleSource: Send + Sync {
    /// Fetch the user's custom category rules, uncompiled.
    async fn custom_rules(&self) -> Result<Vec<CategoryRuleConfig>>;
}

/// Build the full ordered rule list: defaults first, then the source's
/// custom rules compiled and appended.
///
/// # Errors
///
/// Propagates the source's error, or [`timesift_domain::TimesiftError::Validation`]
/// when a custom rule fails to compile.
pub async fn load_rules(source: &dyn CategoryRuleSource) -> Result<Vec<CategoryRule>> {
    let mut rules = default_rules();
    for config in source.custom_rules().await? {
        rules.push(config.compile()?);
    }
    Ok(rules)
}
