//! Extended JSON output.
use crate::{Document, Value};
use serde_json::{Map, Number, json};
use std::fmt;

/// Which extended JSON dialect to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonMode {
    /// Type-preserving: every number and date carries its type wrapper.
    Canonical,
    /// Human-oriented: plain JSON numbers and ISO dates where lossless.
    #[default]
    Relaxed,
}

impl Value {
    pub fn to_extended_json(&self, mode: JsonMode) -> serde_json::Value {
        let canonical = mode == JsonMode::Canonical;
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Int32(i) if canonical => json!({ "$numberInt": i.to_string() }),
            Value::Int32(i) => json!(i),
            Value::Int64(i) if canonical => json!({ "$numberLong": i.to_string() }),
            Value::Int64(i) => json!(i),
            Value::Double(d) => double_to_json(*d, canonical),
            Value::Decimal(d) => json!({ "$numberDecimal": d.to_string() }),
            Value::DateTime(dt) => match dt.to_rfc3339() {
                Some(iso) if !canonical && dt.has_iso_form() => json!({ "$date": iso }),
                _ => json!({ "$date": { "$numberLong": dt.timestamp_millis().to_string() } }),
            },
            Value::Array(items) => serde_json::Value::Array(
                items.iter().map(|v| v.to_extended_json(mode)).collect(),
            ),
            Value::Document(doc) => doc.to_extended_json(mode),
        }
    }
}

impl Document {
    pub fn to_extended_json(&self, mode: JsonMode) -> serde_json::Value {
        let mut map = Map::with_capacity(self.len());
        for (key, value) in self.iter() {
            map.insert(key.to_string(), value.to_extended_json(mode));
        }
        serde_json::Value::Object(map)
    }
}

fn double_to_json(d: f64, canonical: bool) -> serde_json::Value {
    let negative_zero = d == 0.0 && d.is_sign_negative();
    if !canonical && !negative_zero {
        if let Some(n) = Number::from_f64(d) {
            return serde_json::Value::Number(n);
        }
    }
    let text = if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        if d > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        exponent_form(format!("{:?}", d))
    };
    json!({ "$numberDouble": text })
}

/// Spells the exponent as `E+n` / `E-n`.
fn exponent_form(text: String) -> String {
    match text.split_once('e') {
        Some((mantissa, exp)) if exp.starts_with('-') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}E+{exp}"),
        None => text,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_extended_json(JsonMode::Relaxed))
    }
}
