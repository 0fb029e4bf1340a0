//! Dataset overview metrics
//!
//! The headline numbers the dashboard shows before any drill-down: totals,
//! the overall readmission rate, mean stay and medication counts, and the
//! three key-risk-factor tiles.

use serde::Serialize;

use super::{threshold_count, threshold_share};
use crate::models::PatientRecord;

/// Headline metrics over the full dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Total patient encounters loaded
    pub total_patients: u64,
    /// Encounters readmitted within 30 days
    pub readmissions: u64,
    /// `readmissions / total_patients`, 0.0 over an empty dataset
    pub readmission_rate: f64,
    /// Mean days in hospital, 0.0 over an empty dataset
    pub mean_time_in_hospital: f64,
    /// Mean medication count, 0.0 over an empty dataset
    pub mean_medications: f64,
}

impl DatasetSummary {
    /// Compute the overview metrics for a loaded dataset
    #[must_use]
    pub fn compute(records: &[PatientRecord]) -> Self {
        let total_patients = records.len() as u64;
        if total_patients == 0 {
            return Self {
                total_patients: 0,
                readmissions: 0,
                readmission_rate: 0.0,
                mean_time_in_hospital: 0.0,
                mean_medications: 0.0,
            };
        }

        let readmissions = threshold_count(records, |record| record.readmitted_30days);
        let total = total_patients as f64;
        let stay_sum: f64 = records
            .iter()
            .map(|record| f64::from(record.time_in_hospital))
            .sum();
        let meds_sum: f64 = records
            .iter()
            .map(|record| f64::from(record.num_medications))
            .sum();

        Self {
            total_patients,
            readmissions,
            readmission_rate: readmissions as f64 / total,
            mean_time_in_hospital: stay_sum / total,
            mean_medications: meds_sum / total,
        }
    }
}

/// One key-risk-factor tile: how many records match, and what share of the
/// dataset that is
#[derive(Debug, Clone, Serialize)]
pub struct RiskFactorMetric {
    /// Tile label
    pub label: &'static str,
    /// Matching records
    pub count: u64,
    /// Matching share of the dataset, 0.0 when empty
    pub share: f64,
}

/// The three key-risk-factor summary metrics: at least one prior inpatient
/// visit, 15 or more medications, and a stay of 7 or more days
#[must_use]
pub fn key_risk_factors(records: &[PatientRecord]) -> [RiskFactorMetric; 3] {
    [
        risk_factor_metric(records, "Patients with prior admissions", |record| {
            record.number_inpatient >= 1
        }),
        risk_factor_metric(records, "Patients on 15 or more medications", |record| {
            record.num_medications >= 15
        }),
        risk_factor_metric(records, "Hospital stay of 7 or more days", |record| {
            record.time_in_hospital >= 7
        }),
    ]
}

fn risk_factor_metric<P>(
    records: &[PatientRecord],
    label: &'static str,
    predicate: P,
) -> RiskFactorMetric
where
    P: Fn(&PatientRecord) -> bool + Copy,
{
    RiskFactorMetric {
        label,
        count: threshold_count(records, predicate),
        share: threshold_share(records, predicate),
    }
}
