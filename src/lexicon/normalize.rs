//! Text Normalization
//!
//! Row-store cells arrive in several shapes: plain text, numbers, booleans,
//! lists (lookup and multi-select columns), or tagged `{value, state}` cells
//! produced by AI/computed columns. The ranker only understands text, so every
//! shape is collapsed into a single string here.
//!
//! [`to_text`] is total: it has no error path and the worst case for any
//! input is an empty string.

use serde::Deserialize;
use serde_json::{Number, Value};

/// A raw cell value as delivered by the row store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum CellValue {
    Null,
    Text(String),
    Number(Number),
    Bool(bool),
    List(Vec<CellValue>),
    /// A structured cell exposing a nested `value` plus state metadata.
    Tagged {
        value: Option<Box<CellValue>>,
        state: Option<String>,
    },
    /// Any other object. Kept verbatim and rendered as JSON.
    Opaque(Value),
}

impl From<Value> for CellValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CellValue::Null,
            Value::String(s) => CellValue::Text(s),
            Value::Number(n) => CellValue::Number(n),
            Value::Bool(b) => CellValue::Bool(b),
            Value::Array(items) => CellValue::List(items.into_iter().map(CellValue::from).collect()),
            Value::Object(mut map) => match map.remove("value") {
                Some(inner) => {
                    let state = map
                        .get("state")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    let value = match inner {
                        Value::Null => None,
                        other => Some(Box::new(CellValue::from(other))),
                    };
                    CellValue::Tagged { value, state }
                }
                None => CellValue::Opaque(Value::Object(map)),
            },
        }
    }
}

/// Collapses any cell into plain text.
pub fn to_text(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(n) => number_text(n),
        CellValue::Bool(b) => b.to_string(),
        CellValue::List(items) => items.iter().map(to_text).collect::<Vec<_>>().join(" "),
        CellValue::Tagged { value, .. } => value.as_deref().map(to_text).unwrap_or_default(),
        CellValue::Opaque(v) => serde_json::to_string(v).unwrap_or_default(),
    }
}

// Floats go through `f64` Display so `5.0` renders as `5`, like an integer.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}
