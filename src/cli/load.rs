//! Load CSV data into typed rows.

use std::io;

use crate::matcher::Row;
use crate::value::Value;

use super::CliError;

/// Types one raw cell using the loader convention: integer parse first,
/// then float, else the text itself.
pub fn typed_cell(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(x) = raw.parse::<f64>() {
        return Value::Float(x);
    }
    Value::String(raw.to_string())
}

/// Reads CSV from `reader`, taking the first record as the field names and
/// typing every cell with [`typed_cell`]. Field name casing passes through
/// unchanged.
pub fn rows_from_reader<R: io::Read>(reader: R) -> Result<Vec<Row>, CliError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let fields: Vec<String> = csv_reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (field, raw) in fields.iter().zip(record.iter()) {
            row.insert(field.clone(), typed_cell(raw));
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_typing_prefers_int_then_float() {
        assert_eq!(typed_cell("42"), Value::Int(42));
        assert_eq!(typed_cell("-7"), Value::Int(-7));
        assert_eq!(typed_cell("2.5"), Value::Float(2.5));
        assert_eq!(typed_cell("hello"), Value::String("hello".to_string()));
        assert_eq!(typed_cell(""), Value::String(String::new()));
    }

    #[test]
    fn reads_header_and_typed_rows() {
        let data = "name,age,score\nalice,30,9.5\nbob,25,x\n";
        let rows = rows_from_reader(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["name"], Value::String("alice".to_string()));
        assert_eq!(rows[0]["age"], Value::Int(30));
        assert_eq!(rows[0]["score"], Value::Float(9.5));
        assert_eq!(rows[1]["score"], Value::String("x".to_string()));
    }
}
