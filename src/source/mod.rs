//! Document store boundary
//!
//! The core issues exactly one "fetch all documents" query against the
//! patient outcomes collection; all filtering happens in memory afterwards.

pub mod flatten;
pub mod mongo;

use mongodb::bson::Document;

use crate::error::Result;

pub use flatten::{REQUIRED_FIELDS, flatten_document};
pub use mongo::MongoPatientSource;

/// A read-only source of patient outcome documents
pub trait PatientSource {
    /// Retrieve the full set of documents currently in the collection.
    ///
    /// Ordering is not meaningful and duplicates are not deduplicated.
    /// Implementations must never mutate the store.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Document>>> + Send;
}
