//! Named field accessors
//!
//! The presentation layer asks for breakdowns by field name. These enums
//! give it a typed way to do that without writing closures.

use crate::models::PatientRecord;

/// Categorical fields a breakdown can group by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    /// Decade age band
    Age,
    /// Gender label
    Gender,
    /// Race or ethnicity label
    Race,
    /// Primary diagnosis category
    PrimaryDiagnosis,
    /// Readmission outcome label
    ReadmittedLabel,
}

impl GroupField {
    /// The grouping value of this field for one record
    #[must_use]
    pub fn value_of(&self, record: &PatientRecord) -> String {
        match self {
            Self::Age => record.age.clone(),
            Self::Gender => record.gender.clone(),
            Self::Race => record.race.clone(),
            Self::PrimaryDiagnosis => record.primary_diagnosis.clone(),
            Self::ReadmittedLabel => record.readmitted_label.clone(),
        }
    }

    /// Stable field name for display and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Gender => "gender",
            Self::Race => "race",
            Self::PrimaryDiagnosis => "primary_diagnosis",
            Self::ReadmittedLabel => "readmitted_label",
        }
    }
}

/// Numeric fields a cohort comparison can average
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    /// Days in hospital
    TimeInHospital,
    /// Medication count
    NumMedications,
    /// Lab procedure count
    NumLabProcedures,
    /// Diagnosis count
    NumberDiagnoses,
    /// Prior inpatient visits
    NumberInpatient,
    /// Prior emergency visits
    NumberEmergency,
}

impl NumericField {
    /// The numeric value of this field for one record
    #[must_use]
    pub fn value_of(&self, record: &PatientRecord) -> f64 {
        let value = match self {
            Self::TimeInHospital => record.time_in_hospital,
            Self::NumMedications => record.num_medications,
            Self::NumLabProcedures => record.num_lab_procedures,
            Self::NumberDiagnoses => record.number_diagnoses,
            Self::NumberInpatient => record.number_inpatient,
            Self::NumberEmergency => record.number_emergency,
        };
        f64::from(value)
    }

    /// Stable field name for display and serialization
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TimeInHospital => "time_in_hospital",
            Self::NumMedications => "num_medications",
            Self::NumLabProcedures => "num_lab_procedures",
            Self::NumberDiagnoses => "number_diagnoses",
            Self::NumberInpatient => "number_inpatient",
            Self::NumberEmergency => "number_emergency",
        }
    }
}
