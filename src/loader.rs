//! Patient record loading
//!
//! Fetches every document from the configured patient source and flattens
//! each into a [`PatientRecord`] row. The malformed-document policy is
//! skip-and-count by default: a document missing a required field is logged
//! at warn level and counted in [`Dataset::skipped`]. With
//! `fail_on_malformed` set, the first malformed document aborts the whole
//! load instead.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::models::PatientRecord;
use crate::source::{PatientSource, flatten_document};

/// The tabular dataset produced by one load
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    /// One row per source document, in no meaningful order
    pub records: Vec<PatientRecord>,
    /// Documents dropped by the skip-and-count policy
    pub skipped: usize,
    /// When this load completed
    pub loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Whether the load produced no rows at all.
    /// An empty dataset is a valid outcome, not an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Loads and flattens patient documents from a source
pub struct PatientLoader<S> {
    source: S,
    fail_on_malformed: bool,
}

impl<S: PatientSource> PatientLoader<S> {
    /// Create a loader with the default skip-and-count policy
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            fail_on_malformed: false,
        }
    }

    /// Create a loader with the policy taken from configuration
    #[must_use]
    pub fn with_config(source: S, config: &AnalyticsConfig) -> Self {
        Self {
            source,
            fail_on_malformed: config.fail_on_malformed,
        }
    }

    /// Retrieve all documents and assemble the tabular dataset.
    ///
    /// Retrieval is a single fetch-all query; each document yields exactly
    /// one row. Fails with `DataSourceUnavailable` when the store cannot be
    /// reached, and with `MalformedRecord` only under the strict policy.
    pub async fn load(&self) -> Result<Dataset> {
        let documents = self.source.fetch_all().await?;
        log::info!("fetched {} patient documents", documents.len());

        let mut records = Vec::with_capacity(documents.len());
        let mut skipped = 0usize;
        for document in &documents {
            match flatten_document(document) {
                Ok(record) => records.push(record),
                Err(err) if self.fail_on_malformed => return Err(err),
                Err(err) => {
                    log::warn!("skipping patient document: {err}");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} malformed patient documents");
        }
        if records.is_empty() {
            log::info!("patient collection yielded no records");
        }

        Ok(Dataset {
            records,
            skipped,
            loaded_at: Utc::now(),
        })
    }
}
