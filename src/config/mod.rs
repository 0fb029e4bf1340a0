//! Configuration for the readmission analytics core.

use std::env;
use std::time::Duration;

/// Environment variable holding the document store connection string
pub const URI_ENV: &str = "READMIT_DB_URI";
/// Environment variable overriding the database name
pub const DATABASE_ENV: &str = "READMIT_DB_NAME";
/// Environment variable overriding the collection name
pub const COLLECTION_ENV: &str = "READMIT_DB_COLLECTION";

/// Connection settings for the patient document store
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Connection string, usually resolved from the environment.
    /// A missing URI surfaces as `DataSourceUnavailable` at connect time.
    pub uri: Option<String>,
    /// Database holding the patient outcomes collection
    pub database: String,
    /// Collection with one document per patient encounter
    pub collection: String,
    /// Budget for establishing the connection
    pub connect_timeout: Duration,
    /// Budget for picking a reachable server before a read fails
    pub server_selection_timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            uri: None,
            database: "healthcare_db".to_string(),
            collection: "patient_readmissions".to_string(),
            connect_timeout: Duration::from_secs(30),
            server_selection_timeout: Duration::from_secs(30),
        }
    }
}

impl SourceConfig {
    /// Resolve connection settings from the environment, falling back to
    /// defaults for everything but the URI
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: env::var(URI_ENV).ok(),
            database: env::var(DATABASE_ENV).unwrap_or(defaults.database),
            collection: env::var(COLLECTION_ENV).unwrap_or(defaults.collection),
            connect_timeout: defaults.connect_timeout,
            server_selection_timeout: defaults.server_selection_timeout,
        }
    }
}

/// Tunables for aggregation displays and the dataset cache
#[derive(Debug, Clone)]
pub struct AnalyticsConfig {
    /// Smallest group size eligible for rate ranking, to keep
    /// tiny-sample noise out of displayed rates
    pub min_group_size: u64,
    /// Largest prior-visit count included in trend lines
    pub trend_max_key: u32,
    /// Number of rows shown in top-N breakdowns
    pub top_n: usize,
    /// How long a loaded dataset stays fresh before it is refetched
    pub cache_ttl: Duration,
    /// Abort the whole load on the first malformed document instead of
    /// skipping and counting it
    pub fail_on_malformed: bool,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            min_group_size: 100,
            trend_max_key: 5,
            top_n: 10,
            cache_ttl: Duration::from_secs(600),
            fail_on_malformed: false,
        }
    }
}
