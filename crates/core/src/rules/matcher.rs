//! Rule predicate evaluation
//!
//! Pure matching of one [`ActivityRule`] against activity records. App and
//! domain comparisons are lower-cased on both sides; title and URL compare
//! as-is, matching how the rest of the system compares those fields.

use timesift_domain::{parse_domain, ActivityRecord, ActivityRule, RuleCondition, RuleType};

/// Whether a rule matches an activity.
///
/// Inactive rules never match. A duration rule whose value does not parse
/// as a number is inert rather than an error (legacy storage may hold such
/// rules), as is a condition applied to the wrong rule-type shape. Domain
/// rules compare against the hostname parsed from the activity's URL; no
/// URL or an unparseable one means no match.
#[must_use]
pub fn match_rule(activity: &ActivityRecord, rule: &ActivityRule) -> bool {
    if !rule.active {
        return false;
    }

    match rule.rule_type {
        RuleType::Duration => match_duration(activity.duration, rule),
        RuleType::AppName => match_string(
            &activity.owner_name.to_lowercase(),
            &rule.value.to_lowercase(),
            rule.condition,
        ),
        RuleType::Domain => activity
            .url
            .as_deref()
            .and_then(parse_domain)
            .is_some_and(|domain| {
                match_string(&domain.to_lowercase(), &rule.value.to_lowercase(), rule.condition)
            }),
        RuleType::Title => match_string(&activity.title, &rule.value, rule.condition),
        RuleType::Url => activity
            .url
            .as_deref()
            .is_some_and(|url| match_string(url, &rule.value, rule.condition)),
    }
}

fn match_duration(duration_secs: i64, rule: &ActivityRule) -> bool {
    let Ok(value) = rule.value.parse::<f64>() else {
        return false;
    };
    let duration = duration_secs as f64;

    match rule.condition {
        RuleCondition::GreaterThan => duration > value,
        RuleCondition::LessThan => duration < value,
        RuleCondition::Equals => (duration - value).abs() < f64::EPSILON,
        RuleCondition::GreaterOrEqual => duration >= value,
        RuleCondition::LessOrEqual => duration <= value,
        // String operators on a duration rule are inert
        RuleCondition::Contains | RuleCondition::StartsWith | RuleCondition::EndsWith => false,
    }
}

fn match_string(haystack: &str, needle: &str, condition: RuleCondition) -> bool {
    match condition {
        RuleCondition::Equals => haystack == needle,
        RuleCondition::Contains => haystack.contains(needle),
        RuleCondition::StartsWith => haystack.starts_with(needle),
        RuleCondition::EndsWith => haystack.ends_with(needle),
        // Numeric operators on a string rule are inert
        RuleCondition::GreaterThan
        | RuleCondition::LessThan
        | RuleCondition::GreaterOrEqual
        | RuleCondition::LessOrEqual => false,
    }
}

/// Filter a candidate set down to the activities a rule matches.
#[must_use]
pub fn find_matching_activities<'a>(
    activities: &'a [ActivityRecord],
    rule: &ActivityRule,
) -> Vec<&'a ActivityRecord> {
    activities.iter().filter(|activity| match_rule(activity, rule)).collect()
}
