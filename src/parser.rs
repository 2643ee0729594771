use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Cond, Order, Query};
use crate::lexer::tokenize;
use crate::value::Value;

// Consumption-time token classifiers. Tokens carry no type tag, so the
// parser tests each one against an anchored pattern where the grammar
// needs a class rather than an exact keyword.
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+(?:\.\w+)*$").expect("identifier pattern must compile"));
static COMPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:<=|>=|!=|=|<|>|in)$").expect("comparator pattern must compile"));
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("number pattern must compile"));
static QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?:(?:'[^'\n\r]*')+|(?:"[^"\n\r]*")+)$"#).expect("quoted pattern must compile")
});

/// Errors produced while turning a query string into a [`Query`].
///
/// Any parse error aborts construction entirely; no partial query is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input produced no tokens at all
    EmptyQuery,

    /// A required keyword or symbol was missing at the cursor
    Expected {
        expected: &'static str,
        found: Option<String>,
    },

    /// An identifier was required at the cursor
    ExpectedIdentifier { found: Option<String> },

    /// A literal value was required at the cursor
    ExpectedValue { found: Option<String> },

    /// A bare unsigned integer was required (`limit` / `offset`)
    ExpectedNumber { found: Option<String> },

    /// Input continued past a complete query
    TrailingTokens(String),
}

impl ParseError {
    fn found_text(found: &Option<String>) -> &str {
        found.as_deref().unwrap_or("end of query")
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyQuery => write!(f, "query contains no tokens"),
            ParseError::Expected { expected, found } => {
                write!(f, "expected `{}`, found {}", expected, Self::found_text(found))
            }
            ParseError::ExpectedIdentifier { found } => {
                write!(f, "expected identifier, found {}", Self::found_text(found))
            }
            ParseError::ExpectedValue { found } => {
                write!(f, "expected a literal value, found {}", Self::found_text(found))
            }
            ParseError::ExpectedNumber { found } => {
                write!(f, "expected an integer, found {}", Self::found_text(found))
            }
            ParseError::TrailingTokens(token) => {
                write!(f, "unexpected input after query: `{}`", token)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent parser over a tokenized query.
///
/// The parser holds the token vector and a single forward cursor. Every
/// production either matches at the current position or fails the whole
/// parse; the only lookahead is a one-token trial consume, and the cursor
/// never rewinds.
///
/// # Examples
///
/// ```
/// use tql::parser::Parser;
///
/// let query = Parser::new("select a, b from t where a >= 5")
///     .and_then(|p| p.parse())
///     .unwrap();
/// assert_eq!(query.props, vec!["a", "b"]);
/// ```
pub struct Parser {
    tokens: Vec<String>,
    pos: usize,
}

impl Parser {
    /// Tokenizes the query. Fails only when the input yields no tokens.
    pub fn new(query: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Err(ParseError::EmptyQuery);
        }
        Ok(Parser { tokens, pos: 0 })
    }

    /// Parses the token stream into a [`Query`], consuming the parser.
    pub fn parse(mut self) -> Result<Query, ParseError> {
        self.expect("select")?;
        let props = self.parse_select_list()?;
        self.expect("from")?;
        let from = self.expect_identifier()?;

        let mut query = Query {
            props,
            from,
            conds: Vec::new(),
            order_by: None,
            order: None,
            limit: None,
            offset: None,
        };

        if self.consume("where") {
            self.parse_conditions(&mut query)?;
        }
        self.parse_order_by(&mut query)?;
        self.parse_limit(&mut query)?;
        self.parse_offset(&mut query)?;

        if let Some(token) = self.peek() {
            return Err(ParseError::TrailingTokens(token.to_string()));
        }
        Ok(query)
    }

    // ------------------------------------------------------------------
    // Cursor helpers
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<&str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn peek_owned(&self) -> Option<String> {
        self.tokens.get(self.pos).cloned()
    }

    /// Trial-consume: advances past the token if it equals `expected`.
    fn consume(&mut self, expected: &str) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, expected: &'static str) -> Result<(), ParseError> {
        if self.consume(expected) {
            return Ok(());
        }
        Err(ParseError::Expected {
            expected,
            found: self.peek_owned(),
        })
    }

    /// Trial-consume by class: advances and returns the token if it
    /// matches the given anchored pattern.
    fn consume_match(&mut self, pattern: &Regex) -> Option<String> {
        let token = self.tokens.get(self.pos)?;
        if pattern.is_match(token) {
            let token = token.clone();
            self.pos += 1;
            return Some(token);
        }
        None
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        self.consume_match(&IDENTIFIER)
            .ok_or_else(|| ParseError::ExpectedIdentifier {
                found: self.peek_owned(),
            })
    }

    fn expect_number(&mut self) -> Result<i64, ParseError> {
        let token = self
            .consume_match(&NUMBER)
            .ok_or_else(|| ParseError::ExpectedNumber {
                found: self.peek_owned(),
            })?;
        token.parse::<i64>().map_err(|_| ParseError::ExpectedNumber {
            found: Some(token),
        })
    }

    // ------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------

    /// `select_list := "*" | identifier ("," identifier)*`
    fn parse_select_list(&mut self) -> Result<Vec<String>, ParseError> {
        if self.consume("*") {
            return Ok(vec!["*".to_string()]);
        }
        let mut props = vec![self.expect_identifier()?];
        while self.consume(",") {
            props.push(self.expect_identifier()?);
        }
        Ok(props)
    }

    /// `cond ("and" cond)*` where `cond := identifier comparator value`.
    ///
    /// `in` accepts either a scalar value or a parenthesized list; the
    /// scalar form is tried first, exactly like any other comparator.
    fn parse_conditions(&mut self, query: &mut Query) -> Result<(), ParseError> {
        loop {
            let identifier = self.expect_identifier()?;
            let op = self
                .consume_match(&COMPARATOR)
                .ok_or_else(|| ParseError::Expected {
                    expected: "comparison operator",
                    found: self.peek_owned(),
                })?;
            let value = match self.parse_value() {
                Some(value) => value,
                None if op == "in" => self.parse_value_list()?,
                None => {
                    return Err(ParseError::ExpectedValue {
                        found: self.peek_owned(),
                    });
                }
            };
            query.conds.push(Cond {
                identifier,
                op,
                value,
            });
            if !self.consume("and") {
                return Ok(());
            }
        }
    }

    /// Tries to read one literal at the cursor: integer first, then float,
    /// then quoted string, then `true` / `false` / `null`. Returns `None`
    /// without advancing when nothing matches.
    fn parse_value(&mut self) -> Option<Value> {
        let token = self.peek_owned()?;
        if let Ok(n) = token.parse::<i64>() {
            self.pos += 1;
            return Some(Value::Int(n));
        }
        if let Ok(x) = token.parse::<f64>() {
            self.pos += 1;
            return Some(Value::Float(x));
        }
        if let Some(quoted) = self.consume_match(&QUOTED) {
            return Some(Value::QuotedString(unquote(&quoted)));
        }
        if self.consume("true") {
            return Some(Value::Bool(true));
        }
        if self.consume("false") {
            return Some(Value::Bool(false));
        }
        if self.consume("null") {
            return Some(Value::Null);
        }
        None
    }

    /// `value_list := "(" value ("," value)* ")"`
    fn parse_value_list(&mut self) -> Result<Value, ParseError> {
        self.expect("(")?;
        let mut values = Vec::new();
        loop {
            match self.parse_value() {
                Some(value) => values.push(value),
                None => {
                    return Err(ParseError::ExpectedValue {
                        found: self.peek_owned(),
                    });
                }
            }
            if !self.consume(",") {
                break;
            }
        }
        self.expect(")")?;
        Ok(Value::List(values))
    }

    /// `order_clause := "order" "by" identifier ["asc" | "desc"]`
    fn parse_order_by(&mut self, query: &mut Query) -> Result<(), ParseError> {
        if !self.consume("order") {
            return Ok(());
        }
        self.expect("by")?;
        query.order_by = Some(self.expect_identifier()?);
        if self.consume("asc") {
            query.order = Some(Order::Asc);
        } else if self.consume("desc") {
            query.order = Some(Order::Desc);
        }
        Ok(())
    }

    /// `limit_clause := "limit" int ["," int]`; the two-integer form reads
    /// as `limit offset, count`, MySQL style.
    fn parse_limit(&mut self, query: &mut Query) -> Result<(), ParseError> {
        if !self.consume("limit") {
            return Ok(());
        }
        let first = self.expect_number()?;
        if self.consume(",") {
            query.offset = Some(first);
            query.limit = Some(self.expect_number()?);
        } else {
            query.limit = Some(first);
        }
        Ok(())
    }

    /// `"offset" int`, the trailing half of `limit int offset int`.
    fn parse_offset(&mut self, query: &mut Query) -> Result<(), ParseError> {
        if !self.consume("offset") {
            return Ok(());
        }
        query.offset = Some(self.expect_number()?);
        Ok(())
    }
}

/// Strips the surrounding quotes from a quoted token and collapses the
/// doubled-quote escape for whichever quote character delimits it.
fn unquote(token: &str) -> String {
    let inner = &token[1..token.len() - 1];
    if token.starts_with('\'') {
        inner.replace("''", "'")
    } else {
        inner.replace("\"\"", "\"")
    }
}
