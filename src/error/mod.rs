//! Error handling for the readmission analytics core.

/// Specialized error type for loading and shaping patient data
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// The document store could not be reached or refused the connection
    #[error("data source unavailable: {context}")]
    DataSourceUnavailable {
        /// What the core was doing when the store became unreachable
        context: String,
        /// Underlying driver error, when one exists
        #[source]
        source: Option<mongodb::error::Error>,
    },

    /// A patient document is missing a required nested field, or the field
    /// holds a value of the wrong type
    #[error("malformed patient document: required field `{path}` is missing or mistyped")]
    MalformedRecord {
        /// Dotted path of the offending field, e.g. `demographics.age`
        path: String,
    },
}

impl AnalyticsError {
    /// Create a `DataSourceUnavailable` error without a driver source
    #[must_use]
    pub fn unavailable(context: impl Into<String>) -> Self {
        Self::DataSourceUnavailable {
            context: context.into(),
            source: None,
        }
    }

    /// Wrap a driver error with operation context
    #[must_use]
    pub fn driver(context: impl Into<String>, source: mongodb::error::Error) -> Self {
        Self::DataSourceUnavailable {
            context: context.into(),
            source: Some(source),
        }
    }

    /// Create a `MalformedRecord` error for the given dotted field path
    #[must_use]
    pub fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedRecord { path: path.into() }
    }
}

/// Result type for readmission analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
