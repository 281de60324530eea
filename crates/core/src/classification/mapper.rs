//! Category mapper - classifies records and folds them into a category tree
//!
//! Pure functions over a caller-owned, ordered rule list (built-in defaults
//! first, custom rules appended). No mapper instance, no hidden state.

use ahash::AHashMap as HashMap; // Fast non-cryptographic hasher
use timesift_domain::constants::{CATEGORY_INSTANCE_DURATION_MS, UNCATEGORIZED_CATEGORY};
use timesift_domain::{ActivityRecord, CategoryDurationReport, CategoryRule, TimeInstance};
use tracing::debug;

/// Classify a record into a category path.
///
/// Rules are evaluated in list order; the first rule whose predicate
/// matches wins. A predicate matches when **any** of its defined matchers
/// holds (logical OR across matchers): `application` compared
/// case-insensitively as a substring of `ownerName`, `title` tested as a
/// regex against the record title, `domain` matched as a substring of the
/// raw `url`. A rule authored with several matchers therefore fires on any
/// one of them alone (see DESIGN.md).
///
/// Records no rule matches classify as `["Uncategorized"]`.
#[must_use]
pub fn classify(record: &ActivityRecord, rules: &[CategoryRule]) -> Vec<String> {
    rules
        .iter()
        .find(|rule| rule_matches(record, rule))
        .map_or_else(|| vec![UNCATEGORIZED_CATEGORY.to_string()], |rule| rule.category.clone())
}

fn rule_matches(record: &ActivityRecord, rule: &CategoryRule) -> bool {
    if let Some(application) = &rule.application {
        if record.owner_name.to_lowercase().contains(&application.to_lowercase()) {
            return true;
        }
    }
    if let Some(title) = &rule.title {
        if title.is_match(&record.title) {
            return true;
        }
    }
    if let Some(domain) = &rule.domain {
        if record.url.as_deref().is_some_and(|url| url.contains(domain.as_str())) {
            return true;
        }
    }
    false
}

// Arena node used while the tree is under construction. Children are always
// created after their parent, which `assemble` relies on.
struct Node {
    report: CategoryDurationReport,
    children_idx: Vec<usize>,
}

/// Fold classified records into a percentage-normalized category tree.
///
/// Nodes are keyed by their category path. For each record the walk goes
/// root to leaf, creating and parent-linking nodes on first sight, and at
/// **every** level pushes one instance and credits a flat
/// [`CATEGORY_INSTANCE_DURATION_MS`] to the node total; the record's real
/// duration is deliberately ignored (see DESIGN.md). Roots come back in
/// first-seen order with sibling percentages normalized top-down.
#[must_use]
pub fn build_category_tree(
    records: &[ActivityRecord],
    rules: &[CategoryRule],
) -> Vec<CategoryDurationReport> {
    let mut arena: Vec<Node> = Vec::new();
    let mut index: HashMap<Vec<String>, usize> = HashMap::new();
    let mut roots: Vec<usize> = Vec::new();

    for record in records {
        let path = classify(record, rules);
        let mut parent: Option<usize> = None;

        for depth in 1..=path.len() {
            let prefix = path[..depth].to_vec();
            let idx = if let Some(&existing) = index.get(&prefix) {
                existing
            } else {
                let created = arena.len();
                arena.push(Node {
                    report: CategoryDurationReport {
                        category: prefix.clone(),
                        total_duration: 0,
                        percentage: 0.0,
                        children: Vec::new(),
                        instances: Vec::new(),
                    },
                    children_idx: Vec::new(),
                });
                index.insert(prefix, created);
                match parent {
                    Some(p) => arena[p].children_idx.push(created),
                    None => roots.push(created),
                }
                created
            };

            arena[idx].report.total_duration += CATEGORY_INSTANCE_DURATION_MS;
            arena[idx].report.instances.push(TimeInstance {
                start_time: record.timestamp,
                end_time: record.timestamp + CATEGORY_INSTANCE_DURATION_MS,
                duration: CATEGORY_INSTANCE_DURATION_MS,
            });
            parent = Some(idx);
        }
    }

    let mut slots: Vec<Option<Node>> = arena.into_iter().map(Some).collect();
    let mut tree: Vec<CategoryDurationReport> =
        roots.into_iter().filter_map(|root| assemble(&mut slots, root)).collect();

    normalize_percentages(&mut tree);
    debug!(records = records.len(), roots = tree.len(), "built category tree");
    tree
}

/// Move a node and its subtree out of the arena into an owned report.
fn assemble(slots: &mut [Option<Node>], idx: usize) -> Option<CategoryDurationReport> {
    let mut node = slots.get_mut(idx)?.take()?;
    for child_idx in node.children_idx.clone() {
        if let Some(child) = assemble(slots, child_idx) {
            node.report.children.push(child);
        }
    }
    Some(node.report)
}

/// Recursively assign sibling-group percentages, top-down.
///
/// The root set normalizes against the sum of all root totals; each node's
/// children normalize against that node's own total. Sibling percentages
/// sum to ~100 when the group total is nonzero and are all exactly 0 when
/// it is zero.
pub fn normalize_percentages(nodes: &mut [CategoryDurationReport]) {
    let sibling_total: i64 = nodes.iter().map(|n| n.total_duration).sum();
    normalize_against(nodes, sibling_total);
}

fn normalize_against(nodes: &mut [CategoryDurationReport], sibling_total: i64) {
    for node in nodes {
        node.percentage = if sibling_total > 0 {
            node.total_duration as f64 / sibling_total as f64 * 100.0
        } else {
            0.0
        };
        let own_total = node.total_duration;
        normalize_against(&mut node.children, own_total);
    }
}
