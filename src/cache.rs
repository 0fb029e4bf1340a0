//! Dataset caching
//!
//! The loaded dataset is held in memory for a fixed time-to-live so that
//! every view render within the window shares one load. The cache key is
//! constant: there is a single global dataset.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::error::Result;
use crate::loader::{Dataset, PatientLoader};
use crate::source::PatientSource;

struct CacheSlot {
    dataset: Arc<Dataset>,
    refreshed_at: Instant,
}

/// TTL cache around a [`PatientLoader`]
///
/// The slot mutex is held across a refresh, so concurrent callers await the
/// in-flight load instead of issuing duplicate fetches.
pub struct DatasetCache<S> {
    loader: PatientLoader<S>,
    ttl: Duration,
    slot: Mutex<Option<CacheSlot>>,
}

impl<S: PatientSource> DatasetCache<S> {
    /// Create a cache with the given time-to-live window
    #[must_use]
    pub fn new(loader: PatientLoader<S>, ttl: Duration) -> Self {
        Self {
            loader,
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached dataset, refreshing it first if the TTL elapsed.
    ///
    /// A failed refresh surfaces immediately and leaves nothing cached;
    /// there is no silent retry and never a falsely successful empty result.
    pub async fn get_or_refresh(&self) -> Result<Arc<Dataset>> {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.refreshed_at.elapsed() < self.ttl {
                return Ok(Arc::clone(&cached.dataset));
            }
            log::info!("dataset cache expired after {:?}, refreshing", self.ttl);
            *slot = None;
        }

        let dataset = Arc::new(self.loader.load().await?);
        *slot = Some(CacheSlot {
            dataset: Arc::clone(&dataset),
            refreshed_at: Instant::now(),
        });
        Ok(dataset)
    }

    /// Drop the cached dataset so the next call reloads
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}
