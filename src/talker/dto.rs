use serde::Deserialize;
use serde_json::Value;

/// Incoming talker body, decoded loosely so the validation chain can tell
/// missing fields, wrong types and out-of-range values apart and answer with
/// the exact message for each.
#[derive(Debug, Deserialize)]
pub struct TalkerPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub talk: Option<TalkPayload>,
}

#[derive(Debug, Deserialize)]
pub struct TalkPayload {
    #[serde(default, rename = "watchedAt")]
    pub watched_at: Option<String>,
    // An explicit `null` is present (it fails the range check), only an
    // absent field counts as missing.
    #[serde(default, deserialize_with = "explicit_null")]
    pub rate: Option<Value>,
}

fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Query parameters of `GET /talker/search`. `rate` arrives as a raw string
/// so that a non-integer value fails shape validation, not extraction.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub rate: Option<String>,
    pub date: Option<String>,
}
