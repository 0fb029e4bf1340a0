//! MongoDB-backed patient source

use futures::TryStreamExt;
use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use super::PatientSource;
use crate::config::{SourceConfig, URI_ENV};
use crate::error::{AnalyticsError, Result};

/// Patient source reading from a MongoDB collection
pub struct MongoPatientSource {
    collection: Collection<Document>,
}

impl MongoPatientSource {
    /// Connect to the configured store and verify it responds.
    ///
    /// Fails with `DataSourceUnavailable` when no URI is configured, the
    /// connection string is invalid, or the endpoint does not answer a ping
    /// within the configured timeouts.
    pub async fn connect(config: &SourceConfig) -> Result<Self> {
        let uri = config.uri.as_deref().ok_or_else(|| {
            AnalyticsError::unavailable(format!(
                "no connection string configured (set {URI_ENV})"
            ))
        })?;

        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| AnalyticsError::driver("parsing connection string", e))?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client = Client::with_options(options)
            .map_err(|e| AnalyticsError::driver("building database client", e))?;

        // Liveness probe so a bad endpoint fails at connect, not on first read
        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| AnalyticsError::driver("pinging document store", e))?;

        log::info!(
            "connected to patient collection `{}.{}`",
            config.database,
            config.collection
        );

        let collection = client
            .database(&config.database)
            .collection(&config.collection);
        Ok(Self { collection })
    }
}

impl PatientSource for MongoPatientSource {
    async fn fetch_all(&self) -> Result<Vec<Document>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AnalyticsError::driver("querying patient collection", e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AnalyticsError::driver("draining patient cursor", e))
    }
}
