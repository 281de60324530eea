//! Merge engine - consolidates raw capture samples into accounted runs
//!
//! The capture collaborator emits one record every few seconds. A run of
//! same-activity samples folds into a single record whose duration is the
//! sum of its constituents, so totals are conserved exactly.

use timesift_domain::constants::MERGE_GAP_THRESHOLD_MS;
use timesift_domain::{ActivityRecord, MergedActivityRecord};

/// Consolidate a time-ordered stream of raw records.
///
/// Single left-to-right pass with an explicit accumulator, O(n), no
/// sorting. An incoming record folds into the accumulator when it carries
/// the same `activity_id` and starts within [`MERGE_GAP_THRESHOLD_MS`] of
/// the accumulator's **run-start** timestamp; otherwise the accumulator is
/// flushed and a new run begins.
///
/// The gap is measured against the run start, not the most recently merged
/// sample, so a dense run can span well beyond the threshold end to end.
/// Same-id records with different titles still merge; the accumulator keeps
/// the title and owner fields of its first constituent.
///
/// Callers must supply non-decreasing timestamps per logical stream; the
/// engine does not re-sort and produces incorrect grouping if that contract
/// is violated.
///
/// Invariants: output duration sum equals input duration sum (including the
/// empty sequence), output length never exceeds input length, and merging
/// an already-merged output again is a no-op.
#[must_use]
pub fn merge(records: Vec<ActivityRecord>) -> Vec<MergedActivityRecord> {
    let mut merged = Vec::with_capacity(records.len());
    let mut current: Option<MergedActivityRecord> = None;

    for record in records {
        match current {
            Some(ref mut run)
                if run.activity_id == record.activity_id
                    && record.timestamp - run.timestamp <= MERGE_GAP_THRESHOLD_MS =>
            {
                run.duration += record.duration;
            }
            _ => {
                if let Some(finished) = current.replace(record) {
                    merged.push(finished);
                }
            }
        }
    }

    if let Some(finished) = current {
        merged.push(finished);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(activity_id: i64, timestamp: i64, duration: i64) -> ActivityRecord {
        ActivityRecord {
            platform: "darwin".to_string(),
            activity_id,
            title: format!("Window {activity_id}"),
            owner_path: "/Applications/Test.app".to_string(),
            owner_process_id: 100,
            owner_bundle_id: None,
            owner_name: "Test".to_string(),
            url: None,
            timestamp,
            duration,
        }
    }

    fn total_duration(records: &[ActivityRecord]) -> i64 {
        records.iter().map(|r| r.duration).sum()
    }

    #[test]
    fn test_same_id_within_gap_merges() {
        // AC: [{id:1,ts:0},{id:1,ts:300000},{id:2,ts:600000}] -> [{id:1,dur:2},{id:2,dur:1}]
        let records = vec![
            create_test_record(1, 0, 1),
            create_test_record(1, 300_000, 1),
            create_test_record(2, 600_000, 1),
        ];

        let merged = merge(records);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].activity_id, 1);
        assert_eq!(merged[0].duration, 2);
        assert_eq!(merged[0].timestamp, 0);
        assert_eq!(merged[1].activity_id, 2);
        assert_eq!(merged[1].duration, 1);
    }

    #[test]
    fn test_sixteen_minute_gap_splits() {
        // AC: 16-minute gap between same-id records stays unmerged
        let records = vec![create_test_record(1, 0, 1), create_test_record(1, 960_000, 1)];

        let merged = merge(records);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].duration, 1);
        assert_eq!(merged[1].duration, 1);
    }

    #[test]
    fn test_boundary_exact_threshold_merges() {
        // AC: gap == 900000ms merges, 900001ms splits
        let merged =
            merge(vec![create_test_record(1, 0, 1), create_test_record(1, 900_000, 1)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].duration, 2);

        let split =
            merge(vec![create_test_record(1, 0, 1), create_test_record(1, 900_001, 1)]);
        assert_eq!(split.len(), 2);
    }

    #[test]
    fn test_gap_measured_from_run_start_not_last_sample() {
        // Three samples 10 minutes apart: the third is 20 minutes past the
        // run start, so it opens a new run even though it is only 10 minutes
        // past the previously merged sample.
        let records = vec![
            create_test_record(1, 0, 1),
            create_test_record(1, 600_000, 1),
            create_test_record(1, 1_200_000, 1),
        ];

        let merged = merge(records);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].duration, 2);
        assert_eq!(merged[1].timestamp, 1_200_000);
    }

    #[test]
    fn test_different_titles_same_id_still_merge() {
        let mut first = create_test_record(1, 0, 2);
        first.title = "Document A".to_string();
        let mut second = create_test_record(1, 5000, 3);
        second.title = "Document B".to_string();

        let merged = merge(vec![first, second]);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].duration, 5);
        // Accumulator keeps the first constituent's title
        assert_eq!(merged[0].title, "Document A");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        // AC: duration conservation holds for the empty sequence
        let merged = merge(vec![]);
        assert!(merged.is_empty());
        assert_eq!(total_duration(&merged), 0);
    }

    #[test]
    fn test_duration_conservation_and_monotonic_length() {
        let records = vec![
            create_test_record(1, 0, 3),
            create_test_record(2, 10_000, 4),
            create_test_record(2, 20_000, 5),
            create_test_record(1, 30_000, 2),
            create_test_record(1, 40_000, 1),
        ];
        let input_total = total_duration(&records);
        let input_len = records.len();

        let merged = merge(records);

        assert_eq!(total_duration(&merged), input_total);
        assert!(merged.len() <= input_len);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let records = vec![
            create_test_record(1, 0, 1),
            create_test_record(1, 300_000, 1),
            create_test_record(2, 700_000, 2),
            create_test_record(2, 1_800_000, 2),
        ];

        let once = merge(records);
        let twice = merge(once.clone());

        assert_eq!(twice, once);
    }

    #[test]
    fn test_long_interleaved_sequence_conserves_total() {
        // Regression mirror of the long-sequence fixture: 11 interleaved
        // records, alternating runs of two activity ids, 5s apart.
        let mut records = Vec::new();
        let mut ts = 0;
        for (activity_id, count) in [(1, 3), (2, 2), (1, 2), (3, 1), (2, 3)] {
            for i in 0..count {
                records.push(create_test_record(activity_id, ts, i64::from(i) + 1));
                ts += 5_000;
            }
        }
        assert_eq!(records.len(), 11);
        let input_total = total_duration(&records);

        let merged = merge(records);

        assert!(merged.len() < 11);
        assert_eq!(merged.len(), 5);
        assert_eq!(total_duration(&merged), input_total);
    }

    #[test]
    fn test_single_record_passes_through() {
        let merged = merge(vec![create_test_record(1, 1000, 7)]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].duration, 7);
    }
}
