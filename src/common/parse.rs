use serde_json::Value;
use crate::common::time::secs_to_millis;
use crate::common::types::Timestamp;

/// Parses a sample timestamp given in epoch seconds (a JSON number or a numeric string)
/// into epoch millis. Values whose millis do not fit in a `Timestamp` are rejected.
pub fn parse_timestamp_secs(value: &Value) -> Option<Timestamp> {
    parse_number(value)
        .filter(|secs| secs.is_finite())
        .and_then(secs_to_millis)
}

/// Parses a sample value. OpenTSDB sends these as strings, but plain numbers are accepted too.
pub fn parse_sample_value(value: &Value) -> Option<f64> {
    parse_number(value)
}

/// Text of a scalar for error messages, without the quotes JSON would put around a string.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => parse_float(s),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
