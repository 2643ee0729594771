use std::sync::LazyLock;

use regex::Regex;

/// The single longest-match token pattern, in priority order:
/// double-quoted strings (doubled `""` escapes a quote), single-quoted
/// strings (doubled `''` likewise), two-character comparators, the
/// single-character symbols, numbers, dotted identifiers, parentheses,
/// and finally any run of non-whitespace.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?:"[^"\n\r]*")+"#,
        r"|(?:'[^'\n\r]*')+",
        r"|<=|>=|!=|=|<|>|,|\*",
        r"|-?\d+(?:\.\d+)?",
        r"|\w+(?:\.\w+)*",
        r"|\(|\)",
        r"|\S+",
    ))
    .expect("token pattern must compile")
});

/// Splits a TQL query string into its lexical tokens.
///
/// The entire query is lowercased first: the grammar, identifiers, and the
/// contents of quoted string literals are all case-insensitive. Tokens are
/// plain substrings with no type tag; the parser classifies them at
/// consumption time.
///
/// Tokenizing never fails. Blank or whitespace-only input produces an
/// empty vector, which the parser reports as an empty query.
///
/// # Examples
///
/// ```
/// use tql::lexer::tokenize;
///
/// assert_eq!(tokenize("select * from t"), vec!["select", "*", "from", "t"]);
/// assert_eq!(tokenize("a>=10"), vec!["a", ">=", "10"]);
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
