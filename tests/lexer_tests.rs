// tests/lexer_tests.rs

use pretty_assertions::assert_eq;
use tql::lexer::tokenize;

// ============================================================================
// Basic token splitting
// ============================================================================

#[test]
fn test_simple_select() {
    assert_eq!(tokenize("select * from t"), vec!["select", "*", "from", "t"]);
}

#[test]
fn test_whole_query_is_lowercased() {
    assert_eq!(tokenize("SELECT * FROM T"), vec!["select", "*", "from", "t"]);
}

#[test]
fn test_tokens_carry_no_whitespace() {
    for token in tokenize("  select   a ,\tb\nfrom   t  ") {
        assert!(!token.chars().any(char::is_whitespace), "token: {:?}", token);
    }
}

#[test]
fn test_blank_input_yields_no_tokens() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t\n  ").is_empty());
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_two_char_operators_split_without_spaces() {
    assert_eq!(tokenize("a>=10"), vec!["a", ">=", "10"]);
    assert_eq!(tokenize("a<=10"), vec!["a", "<=", "10"]);
    assert_eq!(tokenize("a!=10"), vec!["a", "!=", "10"]);
}

#[test]
fn test_single_char_operators() {
    assert_eq!(tokenize("a=1"), vec!["a", "=", "1"]);
    assert_eq!(tokenize("a<1"), vec!["a", "<", "1"]);
    assert_eq!(tokenize("a>1"), vec!["a", ">", "1"]);
}

#[test]
fn test_two_char_operator_wins_over_single() {
    // `<=` must never tokenize as `<` followed by `=`
    assert_eq!(tokenize("<="), vec!["<="]);
    assert_eq!(tokenize(">="), vec![">="]);
}

// ============================================================================
// Literals and identifiers
// ============================================================================

#[test]
fn test_numbers() {
    assert_eq!(tokenize("42 -7 3.14 -0.5"), vec!["42", "-7", "3.14", "-0.5"]);
}

#[test]
fn test_comma_separates_numbers() {
    assert_eq!(tokenize("10,1"), vec!["10", ",", "1"]);
}

#[test]
fn test_dotted_identifier_is_one_token() {
    assert_eq!(tokenize("a.b.c"), vec!["a.b.c"]);
    assert_eq!(tokenize("test.csv"), vec!["test.csv"]);
}

#[test]
fn test_parentheses() {
    assert_eq!(tokenize("(1, 2)"), vec!["(", "1", ",", "2", ")"]);
}

// ============================================================================
// Quoted strings
// ============================================================================

#[test]
fn test_double_quoted_string_is_one_token() {
    assert_eq!(
        tokenize(r#"c = "hello world""#),
        vec!["c", "=", r#""hello world""#]
    );
}

#[test]
fn test_single_quoted_string_is_one_token() {
    assert_eq!(tokenize("c = 'hello world'"), vec!["c", "=", "'hello world'"]);
}

#[test]
fn test_doubled_quote_escape_stays_in_one_token() {
    assert_eq!(tokenize(r#""He""llo""#), vec![r#""he""llo""#]);
    assert_eq!(tokenize("'it''s'"), vec!["'it''s'"]);
}

#[test]
fn test_quoted_string_contents_are_lowercased() {
    assert_eq!(tokenize(r#""Hello""#), vec![r#""hello""#]);
}

// ============================================================================
// Fallback
// ============================================================================

#[test]
fn test_unrecognized_runs_fall_back_to_non_whitespace() {
    assert_eq!(tokenize("a ~ 5"), vec!["a", "~", "5"]);
    assert_eq!(tokenize("#!"), vec!["#!"]);
}
