use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::news::NewsRecord;
use crate::rules::Category;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// One aggregation run's output for one window. Recomputed wholesale every
/// refresh cycle and published as a full replacement for its cache slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSnapshot {
    pub generated_at: DateTime<Utc>,
    pub total_news: u64,
    pub top_keywords: Vec<KeywordCount>,
    pub source_distribution: Vec<SourceCount>,
    pub category_distribution: Vec<CategoryCount>,
    pub country_distribution: Vec<CountryCount>,
    pub sample_news: Vec<NewsRecord>,
}

/// Pre-grouped data for the homepage view. Every declared category id is
/// present as a key, with its records newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomepageSnapshot {
    pub categorized_news: BTreeMap<String, Vec<NewsRecord>>,
    pub sorted_sources: Vec<String>,
}
