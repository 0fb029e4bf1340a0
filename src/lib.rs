//! A Rust library for loading hospital readmission records from a document
//! store, with nested-document flattening, TTL-cached datasets, grouped
//! aggregation, and a deterministic heuristic risk estimate.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod risk;
pub mod source;

// Re-export the most common types for easier use
// Core types
pub use cache::DatasetCache;
pub use config::{AnalyticsConfig, SourceConfig};
pub use error::{AnalyticsError, Result};
pub use loader::{Dataset, PatientLoader};
pub use models::{DiagnosisCategory, PatientRecord};

// Aggregation
pub use aggregate::{
    AggregateRow, DatasetSummary, GroupField, NumericField, bounded_line_series, count_by_label,
    key_risk_factors, readmission_rate_by, summary_stats, threshold_count, threshold_share,
    top_counts, top_rates,
};

// Risk assessment
pub use risk::{RiskAssessment, RiskInput, RiskLevel, assess};

// Store boundary
pub use source::{MongoPatientSource, PatientSource};
