//! Flattened patient record model
//!
//! One `PatientRecord` is produced per source document. The record is the
//! tabular unit every aggregation operates on; rows are never mutated after
//! load.

use serde::{Deserialize, Serialize};

/// Label shown for an encounter readmitted within 30 days
pub const READMITTED_LABEL: &str = "Readmitted <30 days";
/// Label shown for an encounter with no early readmission
pub const NOT_READMITTED_LABEL: &str = "No readmission";

/// One hospital encounter, flattened from its nested source document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Decade age band, e.g. `[60-70)`
    pub age: String,
    /// Gender as observed in the source data
    pub gender: String,
    /// Race or ethnicity label from the source
    pub race: String,
    /// Length of stay in days, at least 1
    pub time_in_hospital: u32,
    /// Number of distinct medications administered
    pub num_medications: u32,
    /// Number of lab procedures performed
    pub num_lab_procedures: u32,
    /// Number of diagnoses on the encounter, at least 1
    pub number_diagnoses: u32,
    /// Prior inpatient visits in the preceding year
    pub number_inpatient: u32,
    /// Prior emergency visits in the preceding year
    pub number_emergency: u32,
    /// Primary diagnosis category label
    pub primary_diagnosis: String,
    /// Whether the patient was readmitted within 30 days
    pub readmitted_30days: bool,
    /// Human-readable mirror of `readmitted_30days`
    pub readmitted_label: String,
}

impl PatientRecord {
    /// Whether the outcome label agrees with the outcome flag.
    /// Source documents carry both; a loaded row should always pass.
    #[must_use]
    pub fn label_is_consistent(&self) -> bool {
        self.readmitted_label == readmitted_label_for(self.readmitted_30days)
    }
}

/// Canonical label for a readmission outcome flag
#[must_use]
pub fn readmitted_label_for(readmitted_30days: bool) -> &'static str {
    if readmitted_30days {
        READMITTED_LABEL
    } else {
        NOT_READMITTED_LABEL
    }
}
