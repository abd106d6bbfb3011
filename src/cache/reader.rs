use crate::models::{HomepageSnapshot, TrendSnapshot, Window};
use crate::store::{keys, Store};

/// Read-only view of the last published snapshots.
///
/// Reads are total: `None` means no refresh has completed yet (or the slot
/// is unreadable), and callers render an empty-but-valid state. Nothing here
/// computes or mutates.
#[derive(Clone)]
pub struct CacheReader {
    store: Store,
}

impl CacheReader {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn homepage(&self) -> Option<HomepageSnapshot> {
        let fields = match self.store.get_hash(keys::HOMEPAGE_SLOT).await {
            Ok(fields) => fields,
            Err(e) => {
                tracing::warn!("homepage cache read failed: {}", e);
                return None;
            }
        };
        if fields.is_empty() {
            return None;
        }

        let categorized = fields.get(keys::HOMEPAGE_FIELD_CATEGORIZED)?;
        let sources = fields.get(keys::HOMEPAGE_FIELD_SOURCES)?;

        let categorized_news = match serde_json::from_str(categorized) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("corrupt homepage snapshot: {}", e);
                return None;
            }
        };
        let sorted_sources = match serde_json::from_str(sources) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("corrupt homepage source list: {}", e);
                return None;
            }
        };

        Some(HomepageSnapshot {
            categorized_news,
            sorted_sources,
        })
    }

    pub async fn trends(&self, window: Window) -> Option<TrendSnapshot> {
        let raw = match self.store.get(&keys::trends_slot(window)).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("{} trends cache read failed: {}", window, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("corrupt {} trends snapshot: {}", window, e);
                None
            }
        }
    }
}
