use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::store::Store;

/// Periodic report kinds produced by the sibling reporting pipeline. This
/// module only reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Daily,
    Weekly,
    Monthly,
}

impl ReportKind {
    pub fn key_prefix(self) -> &'static str {
        match self {
            ReportKind::Daily => "dailyreport",
            ReportKind::Weekly => "weeklyreport",
            ReportKind::Monthly => "monthlyreport",
        }
    }

    pub fn parse(s: &str) -> Option<ReportKind> {
        match s {
            "daily" => Some(ReportKind::Daily),
            "weekly" => Some(ReportKind::Weekly),
            "monthly" => Some(ReportKind::Monthly),
            _ => None,
        }
    }
}

pub fn report_key(kind: ReportKind, date: NaiveDate) -> String {
    format!("{}-{}", kind.key_prefix(), date.format("%Y%m%d"))
}

/// A decoded report. The encoding is declared next to the body (hash fields
/// `encoding` + `body`) rather than sniffed from the bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportPayload {
    Json(Value),
    Text(String),
}

const FIELD_ENCODING: &str = "encoding";
const FIELD_BODY: &str = "body";

pub struct ReportStore {
    store: Store,
}

impl ReportStore {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Load one stored report. Total: every failure path logs and yields
    /// `None`.
    pub async fn load(&self, kind: ReportKind, date: NaiveDate) -> Option<ReportPayload> {
        let key = report_key(kind, date);

        match self.store.get_hash(&key).await {
            Ok(fields) if !fields.is_empty() => return decode_tagged(&key, &fields),
            Ok(_) => {}
            Err(e) => {
                // Legacy reports are plain strings; HGETALL on those errors
                tracing::debug!("report {} not stored as a hash: {}", key, e);
            }
        }

        match self.store.get(&key).await {
            Ok(Some(raw)) => Some(decode_legacy(&raw)),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("report {} read failed: {}", key, e);
                None
            }
        }
    }
}

fn decode_tagged(key: &str, fields: &HashMap<String, String>) -> Option<ReportPayload> {
    let Some(body) = fields.get(FIELD_BODY) else {
        tracing::warn!("report {} hash has no body field", key);
        return None;
    };
    match fields.get(FIELD_ENCODING).map(String::as_str) {
        Some("json") => match serde_json::from_str(body) {
            Ok(value) => Some(ReportPayload::Json(value)),
            Err(e) => {
                tracing::warn!("report {} declared json but failed to parse: {}", key, e);
                None
            }
        },
        Some("text") => Some(ReportPayload::Text(body.clone())),
        other => {
            tracing::warn!("report {} has unsupported encoding tag {:?}", key, other);
            None
        }
    }
}

/// Untagged legacy values decode JSON-first, then fall back to raw text.
/// The order is load-bearing (a JSON-shaped string can never reach the text
/// branch) and must not change: stored payloads predate the encoding tag.
fn decode_legacy(raw: &str) -> ReportPayload {
    match serde_json::from_str(raw) {
        Ok(value) => ReportPayload::Json(value),
        Err(_) => ReportPayload::Text(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn report_keys_follow_the_store_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(report_key(ReportKind::Daily, date), "dailyreport-20240305");
        assert_eq!(report_key(ReportKind::Weekly, date), "weeklyreport-20240305");
        assert_eq!(
            report_key(ReportKind::Monthly, date),
            "monthlyreport-20240305"
        );
    }

    #[test]
    fn tagged_json_decodes_by_declared_encoding() {
        let decoded = decode_tagged(
            "dailyreport-20240305",
            &fields(&[("encoding", "json"), ("body", r#"{"items": 3}"#)]),
        )
        .unwrap();
        assert_eq!(
            decoded,
            ReportPayload::Json(serde_json::json!({"items": 3}))
        );
    }

    #[test]
    fn tagged_text_is_never_sniffed() {
        // A JSON-shaped body declared as text stays text
        let decoded = decode_tagged(
            "dailyreport-20240305",
            &fields(&[("encoding", "text"), ("body", r#"{"items": 3}"#)]),
        )
        .unwrap();
        assert_eq!(decoded, ReportPayload::Text(r#"{"items": 3}"#.to_string()));
    }

    #[test]
    fn unknown_tag_or_missing_body_is_rejected() {
        assert!(decode_tagged(
            "k",
            &fields(&[("encoding", "pickle"), ("body", "x")])
        )
        .is_none());
        assert!(decode_tagged("k", &fields(&[("encoding", "json")])).is_none());
    }

    #[test]
    fn legacy_decoding_prefers_json_over_text() {
        assert_eq!(
            decode_legacy(r#"[1, 2, 3]"#),
            ReportPayload::Json(serde_json::json!([1, 2, 3]))
        );
        assert_eq!(
            decode_legacy("Weekly summary\nAll quiet."),
            ReportPayload::Text("Weekly summary\nAll quiet.".to_string())
        );
        // Ambiguity preserved on purpose: a bare number is valid JSON
        assert_eq!(
            decode_legacy("42"),
            ReportPayload::Json(serde_json::json!(42))
        );
    }
}
