//! Nested document flattening
//!
//! A strict, total mapping from a raw patient document to a
//! [`PatientRecord`] row. Every required nested path is checked before any
//! value is read; a missing or mistyped path fails the document with
//! `MalformedRecord` naming the dotted path. No inference, no imputation.

use mongodb::bson::{Bson, Document};

use crate::error::{AnalyticsError, Result};
use crate::models::PatientRecord;

/// The twelve nested paths every patient document must populate
pub const REQUIRED_FIELDS: [&str; 12] = [
    "demographics.age",
    "demographics.gender",
    "demographics.race",
    "admission.time_in_hospital",
    "clinical.num_medications",
    "clinical.num_lab_procedures",
    "clinical.number_diagnoses",
    "utilization.number_inpatient",
    "utilization.number_emergency",
    "diagnoses.primary",
    "outcome.readmitted_30days",
    "outcome.readmitted_30days_label",
];

/// Flatten one source document into a `PatientRecord`
pub fn flatten_document(document: &Document) -> Result<PatientRecord> {
    // Presence check up front, so a malformed document is rejected as a
    // whole rather than failing midway through extraction
    for path in REQUIRED_FIELDS {
        lookup(document, path)?;
    }

    Ok(PatientRecord {
        age: get_string(document, "demographics.age")?,
        gender: get_string(document, "demographics.gender")?,
        race: get_string(document, "demographics.race")?,
        time_in_hospital: get_count(document, "admission.time_in_hospital")?,
        num_medications: get_count(document, "clinical.num_medications")?,
        num_lab_procedures: get_count(document, "clinical.num_lab_procedures")?,
        number_diagnoses: get_count(document, "clinical.number_diagnoses")?,
        number_inpatient: get_count(document, "utilization.number_inpatient")?,
        number_emergency: get_count(document, "utilization.number_emergency")?,
        primary_diagnosis: get_string(document, "diagnoses.primary")?,
        readmitted_30days: get_flag(document, "outcome.readmitted_30days")?,
        readmitted_label: get_string(document, "outcome.readmitted_30days_label")?,
    })
}

/// Walk a dotted path through nested subdocuments
fn lookup<'a>(document: &'a Document, path: &str) -> Result<&'a Bson> {
    let mut current = document;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let value = current
            .get(segment)
            .ok_or_else(|| AnalyticsError::malformed(path))?;
        if segments.peek().is_none() {
            return Ok(value);
        }
        current = value
            .as_document()
            .ok_or_else(|| AnalyticsError::malformed(path))?;
    }
    Err(AnalyticsError::malformed(path))
}

/// Extract a string field
fn get_string(document: &Document, path: &str) -> Result<String> {
    match lookup(document, path)? {
        Bson::String(value) => Ok(value.clone()),
        _ => Err(AnalyticsError::malformed(path)),
    }
}

/// Extract a non-negative integer field stored as Int32 or Int64
fn get_count(document: &Document, path: &str) -> Result<u32> {
    let value = match lookup(document, path)? {
        Bson::Int32(value) => i64::from(*value),
        Bson::Int64(value) => *value,
        _ => return Err(AnalyticsError::malformed(path)),
    };
    u32::try_from(value).map_err(|_| AnalyticsError::malformed(path))
}

/// Extract a boolean field stored as a Bool or a 0/1 integer
fn get_flag(document: &Document, path: &str) -> Result<bool> {
    match lookup(document, path)? {
        Bson::Boolean(value) => Ok(*value),
        Bson::Int32(0) | Bson::Int64(0) => Ok(false),
        Bson::Int32(1) | Bson::Int64(1) => Ok(true),
        _ => Err(AnalyticsError::malformed(path)),
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::doc;

    use super::*;
    use crate::error::AnalyticsError;

    fn sample_document() -> Document {
        doc! {
            "demographics": { "age": "[60-70)", "gender": "Female", "race": "Caucasian" },
            "admission": { "time_in_hospital": 8 },
            "clinical": { "num_medications": 25, "num_lab_procedures": 44, "number_diagnoses": 9 },
            "utilization": { "number_inpatient": 2, "number_emergency": 1 },
            "diagnoses": { "primary": "Circulatory" },
            "outcome": { "readmitted_30days": true, "readmitted_30days_label": "Readmitted <30 days" },
        }
    }

    #[test]
    fn flattens_every_field_unchanged() {
        let record = flatten_document(&sample_document()).unwrap();
        assert_eq!(record.age, "[60-70)");
        assert_eq!(record.gender, "Female");
        assert_eq!(record.race, "Caucasian");
        assert_eq!(record.time_in_hospital, 8);
        assert_eq!(record.num_medications, 25);
        assert_eq!(record.num_lab_procedures, 44);
        assert_eq!(record.number_diagnoses, 9);
        assert_eq!(record.number_inpatient, 2);
        assert_eq!(record.number_emergency, 1);
        assert_eq!(record.primary_diagnosis, "Circulatory");
        assert!(record.readmitted_30days);
        assert_eq!(record.readmitted_label, "Readmitted <30 days");
    }

    #[test]
    fn missing_nested_field_names_the_path() {
        let mut document = sample_document();
        document
            .get_document_mut("outcome")
            .unwrap()
            .remove("readmitted_30days");

        let err = flatten_document(&document).unwrap_err();
        match err {
            AnalyticsError::MalformedRecord { path } => {
                assert_eq!(path, "outcome.readmitted_30days");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn missing_subdocument_names_the_path() {
        let mut document = sample_document();
        document.remove("utilization");

        let err = flatten_document(&document).unwrap_err();
        match err {
            AnalyticsError::MalformedRecord { path } => {
                assert_eq!(path, "utilization.number_inpatient");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let mut document = sample_document();
        document
            .get_document_mut("admission")
            .unwrap()
            .insert("time_in_hospital", "eight");

        assert!(flatten_document(&document).is_err());
    }

    #[test]
    fn integer_outcome_flags_are_accepted() {
        let mut document = sample_document();
        document
            .get_document_mut("outcome")
            .unwrap()
            .insert("readmitted_30days", 0);

        let record = flatten_document(&document).unwrap();
        assert!(!record.readmitted_30days);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let mut document = sample_document();
        document
            .get_document_mut("utilization")
            .unwrap()
            .insert("number_emergency", -1);

        assert!(flatten_document(&document).is_err());
    }
}
