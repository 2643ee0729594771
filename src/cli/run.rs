//! Execute TQL queries against CSV data.
//!
//! This is the caller side of the query contract: the core matcher only
//! enforces WHERE conditions, so `order by`, `offset`, `limit`, and the
//! projection list are applied here, in that order, after filtering.

use std::cmp::Ordering;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::ast::{Order, Query};
use crate::matcher::Row;
use crate::output::rows_to_json;
use crate::value::Value;

use super::{CliError, load::rows_from_reader};

/// Options for one query run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The TQL query to execute
    pub query: String,
    /// CSV file to read, overriding the query's FROM clause
    pub file: Option<PathBuf>,
    /// CSV text piped on stdin, used when no file is available
    pub input: Option<String>,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a query run
#[derive(Debug)]
pub enum RunResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Matching rows, post-processed and rendered as a JSON array
    Rows(serde_json::Value),
}

/// Parses the query, loads the CSV source, filters, and post-processes.
pub fn execute_run(options: &RunOptions) -> Result<RunResult, CliError> {
    let query = Query::parse(&options.query)?;

    if options.syntax_only {
        return Ok(RunResult::SyntaxValid);
    }

    let rows = load_rows(&query, options)?;
    let mut matched: Vec<Row> = query.filter(&rows)?.into_iter().cloned().collect();

    order_rows(&mut matched, &query);
    let matched = apply_window(matched, &query);
    let matched = project(matched, &query);

    Ok(RunResult::Rows(rows_to_json(&matched)))
}

/// Source precedence: explicit `--file`, then the FROM name if it exists
/// as a file, then piped stdin.
fn load_rows(query: &Query, options: &RunOptions) -> Result<Vec<Row>, CliError> {
    if let Some(path) = &options.file {
        return rows_from_reader(File::open(path)?);
    }
    let from_path = Path::new(&query.from);
    if from_path.is_file() {
        return rows_from_reader(File::open(from_path)?);
    }
    if let Some(input) = &options.input {
        return rows_from_reader(input.as_bytes());
    }
    Err(CliError::SourceNotFound(query.from.clone()))
}

/// Stable sort by the `order by` field. Rows missing the field sort first;
/// cells of incomparable kinds keep their relative order.
fn order_rows(rows: &mut [Row], query: &Query) {
    let Some(field) = &query.order_by else {
        return;
    };
    let descending = query.order == Some(Order::Desc);
    rows.sort_by(|a, b| {
        let ord = match (a.get(field), b.get(field)) {
            (Some(x), Some(y)) => cell_cmp(x, y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };
        if descending { ord.reverse() } else { ord }
    });
}

fn cell_cmp(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Int(x), Value::Float(y)) => {
            (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Value::Float(x), Value::Int(y)) => {
            x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal)
        }
        (
            Value::String(x) | Value::QuotedString(x),
            Value::String(y) | Value::QuotedString(y),
        ) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn apply_window(rows: Vec<Row>, query: &Query) -> Vec<Row> {
    let offset = query.offset.unwrap_or(0).max(0) as usize;
    let mut rows: Vec<Row> = rows.into_iter().skip(offset).collect();
    if let Some(limit) = query.limit {
        rows.truncate(limit.max(0) as usize);
    }
    rows
}

/// Keeps only the projected fields; `*` keeps everything. Projected fields
/// absent from a row are simply omitted.
fn project(rows: Vec<Row>, query: &Query) -> Vec<Row> {
    if query.selects_all() {
        return rows;
    }
    rows.into_iter()
        .map(|mut row| {
            query
                .props
                .iter()
                .filter_map(|prop| row.remove(prop).map(|cell| (prop.clone(), cell)))
                .collect()
        })
        .collect()
}
