use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rules::Category;
use crate::store::keys::NewsKey;

/// Trailing time span used to filter records for trend aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Weekly,
    Monthly,
}

impl Window {
    pub fn days(self) -> i64 {
        match self {
            Window::Weekly => 7,
            Window::Monthly => 30,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Window::Weekly => "weekly",
            Window::Monthly => "monthly",
        }
    }

    pub fn parse(s: &str) -> Option<Window> {
        match s {
            "weekly" => Some(Window::Weekly),
            "monthly" => Some(Window::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingested news article, normalized at load time.
///
/// `published` keeps the free-text field exactly as stored; `published_date`
/// is the normalized instant used for all ordering and window filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    pub id: NewsKey,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub source: String,
    pub published: String,
    pub published_date: DateTime<Utc>,
    pub category: Category,
    pub country: Option<String>,
    pub raw_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_days() {
        assert_eq!(Window::Weekly.days(), 7);
        assert_eq!(Window::Monthly.days(), 30);
    }

    #[test]
    fn window_parse_rejects_unknown() {
        assert_eq!(Window::parse("weekly"), Some(Window::Weekly));
        assert_eq!(Window::parse("monthly"), Some(Window::Monthly));
        assert_eq!(Window::parse("daily"), None);
    }
}
