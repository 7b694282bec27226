use chrono::DateTime;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// a text column as the list views want it: null becomes empty, other scalars are stringified
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

// timestamps come back as text, or as epoch milliseconds from some importers
// anything else becomes empty, which renders as an invalid date
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|millis| millis as i64))
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.to_rfc3339())
            .unwrap_or_default(),
        _ => String::new(),
    })
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}
