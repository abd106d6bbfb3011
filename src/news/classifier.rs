use crate::rules::{Category, CategoryRule, CountryRule, CATEGORY_RULES, COUNTRY_RULES};

/// Keyword-based category and country attribution.
///
/// The rule tables are injected at construction; `default()` wires the
/// built-in tables from [`crate::rules`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    categories: &'static [CategoryRule],
    countries: &'static [CountryRule],
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            categories: CATEGORY_RULES,
            countries: COUNTRY_RULES,
        }
    }

    /// First category (in canonical order, skipping `Others`) whose first
    /// keyword occurs as a plain substring of the lower-cased
    /// title + summary.
    ///
    /// Substring, not whole-word: "us" inside "business" counts. The live
    /// matching trades precision for speed and this keeps that contract;
    /// `infer_country` is the boundary-aware variant.
    pub fn classify(&self, title: &str, summary: &str) -> Category {
        let text = combined_text(title, summary);
        for rule in self.categories {
            if rule.category == Category::Others {
                continue;
            }
            for keyword in rule.keywords {
                if text.contains(keyword) {
                    return rule.category;
                }
            }
        }
        Category::Others
    }

    /// Country attribution over the same text, word-boundary aware so short
    /// aliases cannot fire inside unrelated words. First matching rule wins.
    pub fn infer_country(&self, title: &str, summary: &str) -> Option<String> {
        let text = combined_text(title, summary);
        for rule in self.countries {
            if rule.aliases.iter().any(|alias| contains_word(&text, alias)) {
                return Some(rule.name.to_string());
            }
        }
        None
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

fn combined_text(title: &str, summary: &str) -> String {
    format!("{} {}", title.to_lowercase(), summary.to_lowercase())
}

/// Substring hit where both ends fall on non-alphanumeric boundaries.
fn contains_word(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    let mut start = 0;
    while let Some(pos) = text[start..].find(phrase) {
        let begin = start + pos;
        let end = begin + phrase.len();
        let left_ok = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let right_ok = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if left_ok && right_ok {
            return true;
        }
        start = begin
            + text[begin..]
                .chars()
                .next()
                .map_or(1, |c| c.len_utf8());
    }
    false
}
