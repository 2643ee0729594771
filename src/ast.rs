//! The parsed representation of a TQL query.
//!
//! A query string such as
//!
//! ```text
//! select a, b from data.csv where a > 100 and b = "x" order by a desc limit 10
//! ```
//!
//! parses into a [`Query`]: the projection list, the source name, a
//! conjunction of [`Cond`] predicates, and the ordering/windowing fields.
//! The structure is built incrementally by the parser and is immutable
//! once parsing succeeds; it owns its conditions and literals outright and
//! can be evaluated against any number of rows.

use crate::parser::{ParseError, Parser};
use crate::value::Value;

/// One atomic `identifier operator value` predicate from the WHERE clause.
///
/// The operator is kept as the raw token text. The grammar only admits the
/// recognized comparator set, but match-time dispatch still carries a
/// defensive unknown-operator branch for conditions constructed by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Cond {
    /// Field name the predicate applies to
    pub identifier: String,
    /// One of `<`, `<=`, `>`, `>=`, `=`, `!=`, `in`
    pub op: String,
    /// The literal to compare the row's cell against
    pub value: Value,
}

/// Explicit sort direction from an `order by` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// A parsed TQL query.
///
/// Only the WHERE conditions are enforced by [`Query::matches`] and
/// [`Query::filter`]; `props`, `order_by`, `order`, `limit`, and `offset`
/// are carried for the caller to apply as post-processing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Projection list; the single sentinel `"*"` selects every field
    pub props: Vec<String>,
    /// Source name from the FROM clause
    pub from: String,
    /// WHERE predicates, combined with AND; empty means match-all
    pub conds: Vec<Cond>,
    /// Field named by `order by`, if any
    pub order_by: Option<String>,
    /// Sort direction; `None` when the clause gave no `asc`/`desc`
    pub order: Option<Order>,
    /// Row count bound from `limit`
    pub limit: Option<i64>,
    /// Leading rows to skip, from `offset` or the `limit a, b` form
    pub offset: Option<i64>,
}

impl Query {
    /// Tokenizes and parses a query string in one step.
    ///
    /// # Examples
    ///
    /// ```
    /// use tql::Query;
    ///
    /// let query = Query::parse("select * from t where a > 100").unwrap();
    /// assert_eq!(query.from, "t");
    /// assert_eq!(query.conds.len(), 1);
    /// ```
    pub fn parse(query: &str) -> Result<Query, ParseError> {
        Parser::new(query)?.parse()
    }

    /// Whether the projection list is the `*` sentinel.
    pub fn selects_all(&self) -> bool {
        self.props.iter().any(|p| p == "*")
    }
}
