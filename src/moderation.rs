use crate::cache::CachePublisher;
use crate::error::Result;
use crate::store::Store;

/// Store-side effect of an admin moderation action: the raw record is
/// removed, then one out-of-band refresh runs so readers stop seeing the
/// record before the next scheduled cycle.
#[derive(Clone)]
pub struct ModerationService {
    store: Store,
    publisher: CachePublisher,
}

impl ModerationService {
    pub fn new(store: Store, publisher: CachePublisher) -> Self {
        Self { store, publisher }
    }

    /// Delete a raw news record and trigger a best-effort refresh. The
    /// deletion is the operation; a failed refresh is logged and left to the
    /// periodic job to reconcile.
    pub async fn remove_record(&self, key: &str, reason: &str) -> Result<()> {
        self.store.delete(key).await?;
        tracing::warn!("removed news record {} ({})", key, reason);

        if let Err(e) = self.publisher.refresh().await {
            tracing::error!("post-moderation refresh failed: {}", e);
        }
        Ok(())
    }
}
