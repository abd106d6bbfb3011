use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    CategoryCount, CountryCount, KeywordCount, NewsRecord, SourceCount, TrendSnapshot, Window,
};
use crate::rules::{self, Category};

const TOP_KEYWORDS_LIMIT: usize = 20;

/// Computes one window's trend statistics from an already-classified record
/// set. Pure: the cutoff instant comes from the caller.
#[derive(Debug, Clone)]
pub struct Aggregator {
    pub sample_news_limit: usize,
    pub country_limit: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            sample_news_limit: 50,
            country_limit: 10,
        }
    }
}

impl Aggregator {
    pub fn new(sample_news_limit: usize, country_limit: usize) -> Self {
        Self {
            sample_news_limit,
            country_limit,
        }
    }

    /// `now` is both the window cutoff reference and the snapshot's
    /// `generated_at`; the publisher captures it once per refresh cycle so
    /// both windows agree on a single instant.
    pub fn aggregate(
        &self,
        records: &[NewsRecord],
        window: Window,
        now: DateTime<Utc>,
    ) -> TrendSnapshot {
        let cutoff = now - Duration::days(window.days());
        let recent: Vec<&NewsRecord> = records
            .iter()
            .filter(|r| r.published_date >= cutoff)
            .collect();

        TrendSnapshot {
            generated_at: now,
            total_news: recent.len() as u64,
            top_keywords: keyword_counts(&recent),
            source_distribution: source_counts(&recent),
            category_distribution: category_counts(&recent),
            country_distribution: self.country_counts(&recent),
            sample_news: recent
                .iter()
                .take(self.sample_news_limit)
                .map(|r| (*r).clone())
                .collect(),
        }
    }

    fn country_counts(&self, recent: &[&NewsRecord]) -> Vec<CountryCount> {
        let mut counter = OrderedCounter::new();
        for record in recent {
            if let Some(country) = &record.country {
                counter.add(country.clone());
            }
        }
        let mut ranked = counter.into_vec();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.country_limit);
        ranked
            .into_iter()
            .map(|(country, count)| CountryCount { country, count })
            .collect()
    }
}

fn keyword_counts(recent: &[&NewsRecord]) -> Vec<KeywordCount> {
    let mut counter = OrderedCounter::new();
    for record in recent {
        for token in tokenize(&record.title, &record.summary) {
            counter.add(token);
        }
    }
    let mut ranked = counter.into_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_KEYWORDS_LIMIT);
    ranked
        .into_iter()
        .map(|(keyword, count)| KeywordCount { keyword, count })
        .collect()
}

fn source_counts(recent: &[&NewsRecord]) -> Vec<SourceCount> {
    let mut counter = OrderedCounter::new();
    for record in recent {
        if !record.source.is_empty() {
            counter.add(record.source.clone());
        }
    }
    let mut ranked = counter.into_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .map(|(source, count)| SourceCount { source, count })
        .collect()
}

/// Every declared category appears, zero counts included, so consumers can
/// render a complete legend. Sorted by count descending; the stable sort
/// leaves equal counts in canonical category order.
fn category_counts(recent: &[&NewsRecord]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Category::ALL
        .iter()
        .map(|&category| CategoryCount { category, count: 0 })
        .collect();
    for record in recent {
        if let Some(entry) = counts.iter_mut().find(|c| c.category == record.category) {
            entry.count += 1;
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Title + summary reduced to countable keywords: non-alphabetic characters
/// stripped, lower-cased, whitespace-tokenized, short/stop/noise words
/// dropped.
fn tokenize(title: &str, summary: &str) -> Vec<String> {
    let combined = format!("{} {}", title, summary).to_lowercase();
    let cleaned: String = combined
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();
    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2)
        .filter(|w| !rules::is_stopword(w))
        .filter(|w| !rules::is_generic(w))
        .map(str::to_string)
        .collect()
}

/// Counter that remembers first-encounter order, so the descending stable
/// sorts above break ties reproducibly.
struct OrderedCounter {
    index: HashMap<String, usize>,
    items: Vec<(String, u64)>,
}

impl OrderedCounter {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            items: Vec::new(),
        }
    }

    fn add(&mut self, item: String) {
        match self.index.get(&item) {
            Some(&i) => self.items[i].1 += 1,
            None => {
                self.index.insert(item.clone(), self.items.len());
                self.items.push((item, 1));
            }
        }
    }

    fn into_vec(self) -> Vec<(String, u64)> {
        self.items
    }
}
