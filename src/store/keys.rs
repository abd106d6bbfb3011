use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Window;

/// Hash slot holding the homepage snapshot.
pub const HOMEPAGE_SLOT: &str = "cache:homepage";
pub const HOMEPAGE_FIELD_CATEGORIZED: &str = "categorized_news_json";
pub const HOMEPAGE_FIELD_SOURCES: &str = "sorted_sources_json";

/// SCAN pattern over-matches; `NewsKey::parse` is the real filter.
pub const NEWS_KEY_SCAN_PATTERN: &str = "news-*";

/// String slot holding one window's serialized trend snapshot.
pub fn trends_slot(window: Window) -> String {
    format!("cache:trends:{}", window)
}

fn news_key_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^news-(\d{8})-(\d{3})$").expect("invalid news key pattern"))
}

/// Typed form of a raw news store key, `news-YYYYMMDD-NNN`: the ingest date
/// plus a per-day sequence number. Serializes as the raw string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NewsKey {
    pub date: NaiveDate,
    pub seq: u16,
}

impl NewsKey {
    pub fn parse(key: &str) -> Option<NewsKey> {
        let caps = news_key_re().captures(key)?;
        let date = NaiveDate::parse_from_str(&caps[1], "%Y%m%d").ok()?;
        let seq = caps[2].parse().ok()?;
        Some(NewsKey { date, seq })
    }

    /// Midnight UTC of the key's embedded date.
    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        self.date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
    }
}

impl fmt::Display for NewsKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "news-{}-{:03}", self.date.format("%Y%m%d"), self.seq)
    }
}

impl Serialize for NewsKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NewsKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        NewsKey::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid news key: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_well_formed_keys() {
        let key = NewsKey::parse("news-20240101-000").unwrap();
        assert_eq!(key.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(key.seq, 0);
        assert_eq!(key.to_string(), "news-20240101-000");
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert!(NewsKey::parse("news-2024011-000").is_none());
        assert!(NewsKey::parse("news-20240101-00").is_none());
        assert!(NewsKey::parse("news-20240101-0000").is_none());
        assert!(NewsKey::parse("report-20240101-000").is_none());
        assert!(NewsKey::parse("news-20241301-000").is_none()); // month 13
    }

    #[test]
    fn serde_round_trip() {
        let key = NewsKey::parse("news-20250607-042").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"news-20250607-042\"");
        let back: NewsKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn keys_order_by_date_then_sequence() {
        let a = NewsKey::parse("news-20240101-001").unwrap();
        let b = NewsKey::parse("news-20240101-002").unwrap();
        let c = NewsKey::parse("news-20240102-000").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn trends_slot_names() {
        assert_eq!(trends_slot(Window::Weekly), "cache:trends:weekly");
        assert_eq!(trends_slot(Window::Monthly), "cache:trends:monthly");
    }
}
