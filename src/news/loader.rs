use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::Result;
use crate::models::NewsRecord;
use crate::news::Classifier;
use crate::rules::Category;
use crate::store::{keys, NewsKey, Store};

/// JSON envelope stored under each news key; the record fields live under
/// the nested `value` key.
#[derive(Debug, Deserialize)]
struct Envelope {
    value: RawNews,
}

#[derive(Debug, Default, Deserialize)]
struct RawNews {
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    source: String,
    #[serde(default)]
    published: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

/// Scans the store for news records and normalizes them for the pipeline.
#[derive(Clone)]
pub struct RecordLoader {
    store: Store,
    classifier: Classifier,
}

impl RecordLoader {
    pub fn new(store: Store, classifier: Classifier) -> Self {
        Self { store, classifier }
    }

    /// Every news record in the store, newest first.
    ///
    /// Fails soft: an unreachable store yields an empty list, and one
    /// malformed value never aborts the batch.
    pub async fn load_all(&self) -> Vec<NewsRecord> {
        match self.try_load().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("failed to load news records from store: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<NewsRecord>> {
        let mut matched: Vec<(NewsKey, String)> = self
            .store
            .scan_keys(keys::NEWS_KEY_SCAN_PATTERN)
            .await?
            .into_iter()
            .filter_map(|raw| NewsKey::parse(&raw).map(|id| (id, raw)))
            .collect();

        if matched.is_empty() {
            return Ok(Vec::new());
        }

        // SCAN order is unspecified; sort so date ties break the same way
        // on every run.
        matched.sort();

        let raw_keys: Vec<String> = matched.iter().map(|(_, raw)| raw.clone()).collect();
        let values = self.store.get_many(&raw_keys).await?;

        let mut records = Vec::with_capacity(matched.len());
        for ((id, raw_key), value) in matched.into_iter().zip(values) {
            let Some(value) = value else { continue };
            if let Some(record) = self.record_from_entry(id, &raw_key, &value) {
                records.push(record);
            }
        }

        // Stable: ascending key order survives within a publish date
        records.sort_by(|a, b| b.published_date.cmp(&a.published_date));

        Ok(records)
    }

    fn record_from_entry(&self, id: NewsKey, raw_key: &str, value: &str) -> Option<NewsRecord> {
        let envelope: Envelope = match serde_json::from_str(value) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::warn!("skipping malformed record {}: {}", raw_key, e);
                return None;
            }
        };
        let raw = envelope.value;

        // Stored category is trusted only if it names a declared category
        let category = raw
            .category
            .as_deref()
            .and_then(Category::from_name)
            .unwrap_or_else(|| self.classifier.classify(&raw.title, &raw.summary));

        let country = raw
            .country
            .filter(|c| !c.is_empty())
            .or_else(|| self.classifier.infer_country(&raw.title, &raw.summary));

        let published_date = published_date_for(id, &raw.published);

        Some(NewsRecord {
            id,
            title: raw.title,
            summary: raw.summary,
            link: raw.link,
            source: raw.source,
            published: raw.published,
            published_date,
            category,
            country,
            raw_key: raw_key.to_string(),
        })
    }
}

/// The key's embedded date is authoritative (always well-formed by
/// construction); the free-text `published` field is a fallback, and
/// anything unparsable collapses to the minimum sentinel so ordering and
/// window filtering stay total.
fn published_date_for(id: NewsKey, published: &str) -> DateTime<Utc> {
    id.published_date()
        .or_else(|| parse_published(published))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn parse_published(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // RSS-style dates, e.g. "Mon, 01 Jan 2024 09:30:00 GMT"
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::Classifier;

    fn loader() -> RecordLoader {
        let store = Store::new("redis://127.0.0.1:6379/0").unwrap();
        RecordLoader::new(store, Classifier::default())
    }

    fn entry(key: &str, json: &str) -> Option<NewsRecord> {
        let id = NewsKey::parse(key).unwrap();
        loader().record_from_entry(id, key, json)
    }

    #[test]
    fn parses_envelope_and_classifies() {
        let record = entry(
            "news-20240101-000",
            r#"{"value": {"title": "Grid upgrade", "summary": "New solar power capacity", "link": "https://example.com/a", "source": "Example Wire", "published": "2024-01-01"}}"#,
        )
        .unwrap();

        assert_eq!(record.category, Category::RenewableEnergy);
        assert_eq!(record.source, "Example Wire");
        assert_eq!(record.raw_key, "news-20240101-000");
        assert_eq!(
            record.published_date,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc()
        );
    }

    #[test]
    fn empty_record_falls_back_to_others() {
        let record = entry("news-20240102-000", r#"{"value": {}}"#).unwrap();
        assert_eq!(record.category, Category::Others);
        assert_eq!(record.country, None);
    }

    #[test]
    fn malformed_json_is_skipped() {
        assert!(entry("news-20240101-001", "{not json").is_none());
        assert!(entry("news-20240101-002", r#"{"no_value": 1}"#).is_none());
    }

    #[test]
    fn stored_category_trusted_only_if_declared() {
        let trusted = entry(
            "news-20240103-000",
            r#"{"value": {"title": "x", "summary": "", "category": "Pollution"}}"#,
        )
        .unwrap();
        assert_eq!(trusted.category, Category::Pollution);

        // Unknown name gets recomputed from the text
        let recomputed = entry(
            "news-20240103-001",
            r#"{"value": {"title": "Solar farms expand", "summary": "", "category": "Tech Gossip"}}"#,
        )
        .unwrap();
        assert_eq!(recomputed.category, Category::RenewableEnergy);
    }

    #[test]
    fn stored_country_trusted_else_inferred() {
        let trusted = entry(
            "news-20240104-000",
            r#"{"value": {"title": "Korea expands wind power", "summary": "", "country": "Mexico"}}"#,
        )
        .unwrap();
        assert_eq!(trusted.country, Some("Mexico".to_string()));

        let inferred = entry(
            "news-20240104-001",
            r#"{"value": {"title": "Korea expands wind power", "summary": ""}}"#,
        )
        .unwrap();
        assert_eq!(inferred.country, Some("South Korea".to_string()));
    }

    #[test]
    fn key_date_beats_free_text_published() {
        let record = entry(
            "news-20240110-000",
            r#"{"value": {"title": "x", "summary": "", "published": "1999-05-05"}}"#,
        )
        .unwrap();
        assert_eq!(record.published_date, record.id.published_date().unwrap());
    }

    #[test]
    fn unparsable_published_collapses_to_sentinel() {
        assert_eq!(parse_published("next tuesday-ish"), None);
        assert_eq!(parse_published(""), None);

        let rfc2822 = parse_published("Mon, 01 Jan 2024 09:30:00 GMT").unwrap();
        assert_eq!(
            rfc2822,
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
                .and_utc()
        );
    }

    #[test]
    fn loader_output_order_newest_first() {
        // Sorting logic exercised directly: two records, later key first
        let older = entry(
            "news-20240101-000",
            r#"{"value": {"title": "a", "summary": "solar power"}}"#,
        )
        .unwrap();
        let newer = entry("news-20240102-000", r#"{"value": {}}"#).unwrap();

        let mut records = vec![older.clone(), newer.clone()];
        records.sort_by(|a, b| b.published_date.cmp(&a.published_date));

        assert_eq!(records[0].raw_key, "news-20240102-000");
        assert_eq!(records[1].raw_key, "news-20240101-000");
        assert_eq!(records[0].category, Category::Others);
        assert_eq!(records[1].category, Category::RenewableEnergy);
    }
}
