use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;

use crate::error::Result;
use crate::models::{HomepageSnapshot, NewsRecord, Window};
use crate::news::RecordLoader;
use crate::rules::Category;
use crate::store::{keys, Store};
use crate::trends::Aggregator;

/// Sole writer of the published cache slots.
///
/// One `refresh` cycle loads the record set once and derives the homepage
/// snapshot and both trend snapshots from it, so readers always see mutually
/// consistent data.
#[derive(Clone)]
pub struct CachePublisher {
    store: Store,
    loader: RecordLoader,
    aggregator: Aggregator,
}

impl CachePublisher {
    pub fn new(store: Store, loader: RecordLoader, aggregator: Aggregator) -> Self {
        Self {
            store,
            loader,
            aggregator,
        }
    }

    /// Run one full refresh cycle. Nothing is written until every snapshot
    /// has been computed and serialized; a failed cycle leaves the previous
    /// snapshots in place.
    pub async fn refresh(&self) -> Result<()> {
        tracing::info!("starting news cache refresh");

        let records = self.loader.load_all().await;
        if records.is_empty() {
            tracing::warn!("no news records loaded; keeping previous snapshots");
            return Ok(());
        }

        let now = Utc::now();
        let homepage = build_homepage(&records);
        let weekly = self.aggregator.aggregate(&records, Window::Weekly, now);
        let monthly = self.aggregator.aggregate(&records, Window::Monthly, now);

        let categorized_json = serde_json::to_string(&homepage.categorized_news)?;
        let sources_json = serde_json::to_string(&homepage.sorted_sources)?;
        let weekly_json = serde_json::to_string(&weekly)?;
        let monthly_json = serde_json::to_string(&monthly)?;

        self.store
            .set_hash(
                keys::HOMEPAGE_SLOT,
                &[
                    (keys::HOMEPAGE_FIELD_CATEGORIZED, categorized_json),
                    (keys::HOMEPAGE_FIELD_SOURCES, sources_json),
                ],
            )
            .await?;
        self.store
            .set(&keys::trends_slot(Window::Weekly), &weekly_json)
            .await?;
        self.store
            .set(&keys::trends_slot(Window::Monthly), &monthly_json)
            .await?;

        tracing::info!(
            "published {} records (weekly window {}, monthly window {})",
            records.len(),
            weekly.total_news,
            monthly.total_news
        );
        Ok(())
    }
}

/// Bucket records by category id, keeping the loader's newest-first order
/// inside each bucket. Every declared id is present so the homepage can
/// render every section; sources come out deduplicated and sorted.
pub fn build_homepage(records: &[NewsRecord]) -> HomepageSnapshot {
    let mut categorized_news: BTreeMap<String, Vec<NewsRecord>> = Category::ALL
        .iter()
        .map(|category| (category.id().to_string(), Vec::new()))
        .collect();
    for record in records {
        if let Some(bucket) = categorized_news.get_mut(record.category.id()) {
            bucket.push(record.clone());
        }
    }

    let sources: BTreeSet<String> = records
        .iter()
        .filter(|r| !r.source.is_empty())
        .map(|r| r.source.clone())
        .collect();

    HomepageSnapshot {
        categorized_news,
        sorted_sources: sources.into_iter().collect(),
    }
}
