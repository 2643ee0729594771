// tests/integration_tests.rs
//
// End-to-end: CSV in, parsed query, filtered and post-processed rows out.

use pretty_assertions::assert_eq;
use serde_json::json;
use tql::Query;
use tql::cli::{CliError, RunOptions, RunResult, execute_run, rows_from_reader};

const PEOPLE: &str = "\
name,dept,score
Alice,eng,9.5
Bob,ops,7.25
Carol,eng,8.75
Dave,eng,9.5
Eve,ops,6.0
";

fn run(query: &str) -> Result<RunResult, CliError> {
    execute_run(&RunOptions {
        query: query.to_string(),
        input: Some(PEOPLE.to_string()),
        ..RunOptions::default()
    })
}

fn run_rows(query: &str) -> serde_json::Value {
    match run(query).unwrap() {
        RunResult::Rows(rows) => rows,
        other => panic!("expected rows, got {:?}", other),
    }
}

// ============================================================================
// Library pipeline (no post-processing)
// ============================================================================

#[test]
fn test_filter_over_loaded_csv() {
    let rows = rows_from_reader(PEOPLE.as_bytes()).unwrap();
    let query = Query::parse("select * from t where score >= 7.0").unwrap();
    assert_eq!(query.filter(&rows).unwrap().len(), 4);
}

#[test]
fn test_core_filter_ignores_limit_and_projection() {
    let rows = rows_from_reader(PEOPLE.as_bytes()).unwrap();
    let query = Query::parse("select name from t order by score limit 1").unwrap();
    // The matcher applies conditions only; everything else is the
    // caller's job, so all five rows come back with all their fields.
    let matched = query.filter(&rows).unwrap();
    assert_eq!(matched.len(), 5);
    assert_eq!(matched[0].len(), 3);
}

// ============================================================================
// CLI execution and post-processing
// ============================================================================

#[test]
fn test_filter_order_and_limit() {
    let rows = run_rows(
        r#"select name, score from t where dept = "eng" order by score desc limit 2"#,
    );
    assert_eq!(
        rows,
        json!([
            {"name": "Alice", "score": 9.5},
            {"name": "Dave", "score": 9.5},
        ])
    );
}

#[test]
fn test_offset_skips_leading_rows() {
    let rows = run_rows(
        r#"select name from t where dept = "eng" order by score asc limit 1 offset 1"#,
    );
    assert_eq!(rows, json!([{"name": "Alice"}]));
}

#[test]
fn test_comma_limit_form_windows_in_input_order() {
    let rows = run_rows("select name from t limit 2,2");
    assert_eq!(rows, json!([{"name": "Carol"}, {"name": "Dave"}]));
}

#[test]
fn test_star_projection_keeps_all_fields() {
    let rows = run_rows(r#"select * from t where dept = "ops" and score > 7.0"#);
    assert_eq!(rows, json!([{"name": "Bob", "dept": "ops", "score": 7.25}]));
}

#[test]
fn test_order_by_string_field() {
    let rows = run_rows(r#"select dept from t where dept != "eng" order by name asc"#);
    assert_eq!(rows, json!([{"dept": "ops"}, {"dept": "ops"}]));
}

#[test]
fn test_syntax_only_skips_execution() {
    let result = execute_run(&RunOptions {
        query: "select * from nosuchfile where a > 1".to_string(),
        syntax_only: true,
        ..RunOptions::default()
    })
    .unwrap();
    assert!(matches!(result, RunResult::SyntaxValid));
}

// ============================================================================
// Error surfacing
// ============================================================================

#[test]
fn test_parse_error_is_reported() {
    assert!(matches!(
        run("select from t"),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn test_match_error_is_reported_not_swallowed() {
    assert!(matches!(
        run("select * from t where nope > 1"),
        Err(CliError::Match(tql::MatchError::FieldNotFound(_)))
    ));
}

#[test]
fn test_missing_source_is_reported() {
    let result = execute_run(&RunOptions {
        query: "select * from nosuchfile.csv".to_string(),
        ..RunOptions::default()
    });
    assert!(matches!(result, Err(CliError::SourceNotFound(name)) if name == "nosuchfile.csv"));
}
