//! Built-in category rule set
//!
//! Ordered defaults evaluated before any caller-supplied custom rules.
//! Each entry carries a single matcher except the Email rule, which
//! matches Outlook by application OR the Gmail domain (matchers are
//! OR-combined, see DESIGN.md).

use lazy_static::lazy_static;
use regex::Regex;
use timesift_domain::CategoryRule;

lazy_static! {
    static ref DEFAULT_RULES: Vec<CategoryRule> = build_default_rules();
}

/// The built-in default rule set, in evaluation order.
///
/// Callers append custom rules from the configuration collaborator after
/// these.
#[must_use]
pub fn default_rules() -> Vec<CategoryRule> {
    DEFAULT_RULES.clone()
}

fn path(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

fn app_rule(category: &[&str], application: &str) -> CategoryRule {
    CategoryRule {
        category: path(category),
        application: Some(application.to_string()),
        title: None,
        domain: None,
    }
}

fn domain_rule(category: &[&str], domain: &str) -> CategoryRule {
    CategoryRule {
        category: path(category),
        application: None,
        title: None,
        domain: Some(domain.to_string()),
    }
}

fn title_rule(category: &[&str], pattern: &str) -> CategoryRule {
    CategoryRule {
        category: path(category),
        application: None,
        // Built-in patterns are literals; failing to compile is a bug
        title: Some(Regex::new(pattern).expect("built-in title pattern should compile")),
        domain: None,
    }
}

fn build_default_rules() -> Vec<CategoryRule> {
    vec![
        // Work / Programming: editors and IDEs by application, developer
        // sites by domain
        app_rule(&["Work", "Programming"], "visual studio code"),
        app_rule(&["Work", "Programming"], "intellij"),
        app_rule(&["Work", "Programming"], "xcode"),
        app_rule(&["Work", "Programming"], "iterm"),
        app_rule(&["Work", "Programming"], "terminal"),
        domain_rule(&["Work", "Programming"], "github.com"),
        domain_rule(&["Work", "Programming"], "gitlab.com"),
        domain_rule(&["Work", "Programming"], "stackoverflow.com"),
        // Work / Design
        app_rule(&["Work", "Design"], "figma"),
        app_rule(&["Work", "Design"], "sketch"),
        app_rule(&["Work", "Design"], "photoshop"),
        // Work / Writing
        app_rule(&["Work", "Writing"], "microsoft word"),
        app_rule(&["Work", "Writing"], "pages"),
        app_rule(&["Work", "Writing"], "obsidian"),
        domain_rule(&["Work", "Writing"], "docs.google.com"),
        // Communication / Email: Outlook by application OR Gmail by domain
        CategoryRule {
            category: path(&["Communication", "Email"]),
            application: Some("outlook".to_string()),
            title: None,
            domain: Some("mail.google.com".to_string()),
        },
        app_rule(&["Communication", "Email"], "mail"),
        // Communication / Chat
        app_rule(&["Communication", "Chat"], "slack"),
        app_rule(&["Communication", "Chat"], "discord"),
        app_rule(&["Communication", "Chat"], "teams"),
        app_rule(&["Communication", "Chat"], "messages"),
        // Entertainment / Video
        domain_rule(&["Entertainment", "Video"], "youtube.com"),
        domain_rule(&["Entertainment", "Video"], "netflix.com"),
        app_rule(&["Entertainment", "Video"], "vlc"),
        // Entertainment / Music
        app_rule(&["Entertainment", "Music"], "spotify"),
        domain_rule(&["Entertainment", "Music"], "soundcloud.com"),
        // Entertainment / Games
        app_rule(&["Entertainment", "Games"], "steam"),
        // Utilities
        app_rule(&["Utilities"], "finder"),
        app_rule(&["Utilities"], "system settings"),
        title_rule(&["Entertainment", "Games"], "(?i)minecraft"),
    ]
}
