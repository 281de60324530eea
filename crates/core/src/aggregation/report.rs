//! Duration report builder - per-dimension rollups over a time window

use ahash::AHashMap as HashMap; // Fast non-cryptographic hasher
use timesift_domain::{
    parse_domain, ApplicationDurationReport, DomainDurationReport, MergedActivityRecord,
    ReportDimension, ReportWindow, TimeInstance, TitleDurationReport,
};
use tracing::debug;

/// Duration rollup for one key of the queried dimension.
///
/// The typed wrappers below map this onto the per-dimension report structs
/// the dashboard consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionDurationReport {
    /// Group key: `ownerName`, parsed hostname, or `title`
    pub key: String,

    /// Summed duration across the group (seconds)
    pub total_duration: i64,

    /// Share of the grand total (0-100); 0 when the grand total is 0
    pub percentage: f64,

    /// Constituent record instances
    pub instances: Vec<TimeInstance>,
}

/// Group merged records by one dimension over a half-open window.
///
/// Records whose `timestamp` falls outside `[start, end)` are dropped; for
/// the domain dimension, records without a parseable URL are skipped.
/// Groups are sorted descending by total duration, ties broken by key so
/// output is deterministic.
///
/// Overlapping instances for the same key are summed additively: this is a
/// duration *accounting* total, not a wall-clock union, and can nominally
/// exceed the window length if the capture collaborator ever emits
/// overlapping slices.
#[must_use]
pub fn build_duration_report(
    records: &[MergedActivityRecord],
    window: ReportWindow,
    dimension: ReportDimension,
) -> Vec<DimensionDurationReport> {
    struct Group {
        total_duration: i64,
        instances: Vec<TimeInstance>,
    }

    let mut groups: HashMap<String, Group> = HashMap::new();

    for record in records {
        if !window.contains(record.timestamp) {
            continue;
        }
        let Some(key) = dimension_key(record, dimension) else {
            continue;
        };

        let group = groups.entry(key).or_insert_with(|| Group {
            total_duration: 0,
            instances: Vec::new(),
        });
        group.total_duration += record.duration;
        group.instances.push(TimeInstance {
            start_time: record.timestamp,
            end_time: record.timestamp + record.duration * 1000,
            duration: record.duration,
        });
    }

    let grand_total: i64 = groups.values().map(|g| g.total_duration).sum();

    let mut reports: Vec<DimensionDurationReport> = groups
        .into_iter()
        .map(|(key, group)| DimensionDurationReport {
            key,
            total_duration: group.total_duration,
            percentage: if grand_total > 0 {
                group.total_duration as f64 / grand_total as f64 * 100.0
            } else {
                0.0
            },
            instances: group.instances,
        })
        .collect();

    // Descending by total, key ascending for deterministic ties
    reports.sort_by(|a, b| {
        b.total_duration.cmp(&a.total_duration).then_with(|| a.key.cmp(&b.key))
    });

    debug!(?dimension, groups = reports.len(), total = grand_total, "built duration report");
    reports
}

fn dimension_key(record: &MergedActivityRecord, dimension: ReportDimension) -> Option<String> {
    match dimension {
        ReportDimension::Application => Some(record.owner_name.clone()),
        ReportDimension::Domain => record.url.as_deref().and_then(parse_domain),
        ReportDimension::Title => Some(record.title.clone()),
    }
}

/// Application rollup over the window.
#[must_use]
pub fn build_application_report(
    records: &[MergedActivityRecord],
    window: ReportWindow,
) -> Vec<ApplicationDurationReport> {
    build_duration_report(records, window, ReportDimension::Application)
        .into_iter()
        .map(|r| ApplicationDurationReport {
            name: r.key,
            total_duration: r.total_duration,
            percentage: r.percentage,
            instances: r.instances,
        })
        .collect()
}

/// Domain rollup over the window. Records without a parseable URL are
/// skipped.
#[must_use]
pub fn build_domain_report(
    records: &[MergedActivityRecord],
    window: ReportWindow,
) -> Vec<DomainDurationReport> {
    build_duration_report(records, window, ReportDimension::Domain)
        .into_iter()
        .map(|r| DomainDurationReport {
            domain: r.key,
            total_duration: r.total_duration,
            percentage: r.percentage,
            instances: r.instances,
        })
        .collect()
}

/// Title rollup over the window.
#[must_use]
pub fn build_title_report(
    records: &[MergedActivityRecord],
    window: ReportWindow,
) -> Vec<TitleDurationReport> {
    build_duration_report(records, window, ReportDimension::Title)
        .into_iter()
        .map(|r| TitleDurationReport {
            title: r.key,
            total_duration: r.total_duration,
            percentage: r.percentage,
            instances: r.instances,
        })
        .collect()
}
