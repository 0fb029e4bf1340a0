//! Grouped aggregation over loaded patient records
//!
//! Every function here is pure, deterministic, and side-effect-free. Groups
//! only exist when they have at least one member, so a rate is always
//! well-defined; an empty record slice always yields an empty result.

pub mod fields;
pub mod summary;

use std::cmp::Ordering;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::models::PatientRecord;

pub use fields::{GroupField, NumericField};
pub use summary::{DatasetSummary, RiskFactorMetric, key_risk_factors};

/// One group in a readmission-rate breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow<K = String> {
    /// Grouping key value
    pub key: K,
    /// Records in the group that were readmitted within 30 days
    pub readmissions: u64,
    /// Records in the group
    pub total: u64,
    /// `readmissions / total`, a fraction in [0, 1]
    pub rate: f64,
}

/// Count records per label of a categorical field
pub fn count_by_label<F>(records: &[PatientRecord], key: F) -> FxHashMap<String, u64>
where
    F: Fn(&PatientRecord) -> String,
{
    let mut counts = FxHashMap::default();
    for record in records {
        *counts.entry(key(record)).or_insert(0u64) += 1;
    }
    counts
}

/// Count records per pair of labels, for grouped bar breakdowns such as
/// gender by readmission status
pub fn count_by_label_pair<F, G>(
    records: &[PatientRecord],
    first: F,
    second: G,
) -> FxHashMap<(String, String), u64>
where
    F: Fn(&PatientRecord) -> String,
    G: Fn(&PatientRecord) -> String,
{
    let mut counts = FxHashMap::default();
    for record in records {
        *counts
            .entry((first(record), second(record)))
            .or_insert(0u64) += 1;
    }
    counts
}

/// Group records by a key and compute the readmission rate of each group.
///
/// Rows come back ranked by the deterministic rule: rate descending, ties
/// broken by total descending, then by ascending key order.
pub fn readmission_rate_by<K, F>(records: &[PatientRecord], key: F) -> Vec<AggregateRow<K>>
where
    K: Ord + std::hash::Hash + Eq,
    F: Fn(&PatientRecord) -> K,
{
    let groups = records.iter().into_group_map_by(|record| key(record));

    let mut rows: Vec<AggregateRow<K>> = groups
        .into_iter()
        .map(|(key, members)| rate_row(key, &members))
        .collect();
    rows.sort_unstable_by(rank_ordering);
    rows
}

/// Keep only groups large enough to display and take the first `n`.
///
/// `rows` must already be ranked, as produced by [`readmission_rate_by`];
/// dropping small groups preserves the ranking order.
#[must_use]
pub fn top_rates<K>(rows: Vec<AggregateRow<K>>, min_total: u64, n: usize) -> Vec<AggregateRow<K>> {
    rows.into_iter()
        .filter(|row| row.total >= min_total)
        .take(n)
        .collect()
}

/// The `n` most frequent labels of a categorical field, count descending
/// with ascending label order breaking ties
pub fn top_counts<F>(records: &[PatientRecord], key: F, n: usize) -> Vec<(String, u64)>
where
    F: Fn(&PatientRecord) -> String,
{
    count_by_label(records, key)
        .into_iter()
        .sorted_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .take(n)
        .collect()
}

/// Mean of each numeric field, grouped by a categorical field.
///
/// Groups come back in ascending group order. A group only exists with at
/// least one member, so every emitted mean is defined.
pub fn summary_stats<F>(
    records: &[PatientRecord],
    group: F,
    fields: &[NumericField],
) -> Vec<GroupMeans>
where
    F: Fn(&PatientRecord) -> String,
{
    records
        .iter()
        .into_group_map_by(|record| group(record))
        .into_iter()
        .map(|(group, members)| {
            let mut means = FxHashMap::default();
            for field in fields {
                let sum: f64 = members.iter().map(|record| field.value_of(record)).sum();
                means.insert(field.name(), sum / members.len() as f64);
            }
            GroupMeans { group, means }
        })
        .sorted_unstable_by(|a, b| a.group.cmp(&b.group))
        .collect()
}

/// Mean values of the numeric fields for one group
#[derive(Debug, Clone, Serialize)]
pub struct GroupMeans {
    /// Grouping key value
    pub group: String,
    /// Field name to arithmetic mean
    pub means: FxHashMap<&'static str, f64>,
}

/// Readmission rate per integer key, restricted to keys at most `max_key`
/// and ordered ascending by key, for trend lines over prior-visit counts
pub fn bounded_line_series<F>(
    records: &[PatientRecord],
    key: F,
    max_key: u32,
) -> Vec<AggregateRow<u32>>
where
    F: Fn(&PatientRecord) -> u32,
{
    let mut rows: Vec<AggregateRow<u32>> = records
        .iter()
        .filter(|record| key(record) <= max_key)
        .into_group_map_by(|record| key(record))
        .into_iter()
        .map(|(key, members)| rate_row(key, &members))
        .collect();
    rows.sort_unstable_by_key(|row| row.key);
    rows
}

/// Count records satisfying a predicate
pub fn threshold_count<P>(records: &[PatientRecord], predicate: P) -> u64
where
    P: Fn(&PatientRecord) -> bool,
{
    records.iter().filter(|record| predicate(record)).count() as u64
}

/// Fraction of records satisfying a predicate, 0.0 over an empty dataset
pub fn threshold_share<P>(records: &[PatientRecord], predicate: P) -> f64
where
    P: Fn(&PatientRecord) -> bool,
{
    if records.is_empty() {
        return 0.0;
    }
    threshold_count(records, predicate) as f64 / records.len() as f64
}

fn rate_row<K>(key: K, members: &[&PatientRecord]) -> AggregateRow<K> {
    let total = members.len() as u64;
    let readmissions = members
        .iter()
        .filter(|record| record.readmitted_30days)
        .count() as u64;
    AggregateRow {
        key,
        readmissions,
        total,
        rate: readmissions as f64 / total as f64,
    }
}

fn rank_ordering<K: Ord>(a: &AggregateRow<K>, b: &AggregateRow<K>) -> Ordering {
    b.rate
        .total_cmp(&a.rate)
        .then_with(|| b.total.cmp(&a.total))
        .then_with(|| a.key.cmp(&b.key))
}
