//! JSON rendering of query results.
//!
//! Result rows are converted to `serde_json` values so the CLI (or any
//! embedder) can print them compactly or pretty. The conversion is total:
//! non-finite floats become JSON null, quoted strings and references
//! become plain JSON strings.

use crate::matcher::Row;
use crate::value::Value;

/// Converts one TQL value to a JSON value.
pub fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(n) => serde_json::Value::Number((*n).into()),
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) | Value::QuotedString(s) | Value::Reference(s) => {
            serde_json::Value::String(s.clone())
        }
        Value::List(values) => {
            serde_json::Value::Array(values.iter().map(value_to_json).collect())
        }
    }
}

/// Converts one row to a JSON object.
pub fn row_to_json(row: &Row) -> serde_json::Value {
    let object = row
        .iter()
        .map(|(field, cell)| (field.clone(), value_to_json(cell)))
        .collect();
    serde_json::Value::Object(object)
}

/// Converts a result set to a JSON array of objects, preserving order.
pub fn rows_to_json(rows: &[Row]) -> serde_json::Value {
    serde_json::Value::Array(rows.iter().map(row_to_json).collect())
}
