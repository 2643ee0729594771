//! Condition evaluation against rows.
//!
//! A [`Row`] maps field names to typed [`Value`] cells; matching a
//! [`Query`] folds its conditions with logical AND. Only the WHERE
//! conditions are enforced here: `limit`, `offset`, `order_by`, and the
//! projection list are carried on the [`Query`] for the caller to apply.
//!
//! Evaluation failures are surfaced, never swallowed: a condition naming a
//! field the row lacks, or comparing incompatible kinds, makes the row's
//! match an error rather than `false`, so callers can tell "did not match"
//! from "could not be evaluated".

use std::collections::HashMap;

use crate::ast::{Cond, Query};
use crate::value::Value;

/// One record to be tested against a query: field name to typed cell.
///
/// Field lookups are by exact key. Query identifiers are lowercased during
/// tokenization while row field names pass through as loaded, so callers
/// with mixed-case field names should normalize them.
pub type Row = HashMap<String, Value>;

/// Errors produced while matching conditions against a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The condition names a field the row does not contain
    FieldNotFound(String),

    /// A comparison was applied to an incompatible pair of value kinds
    TypeMismatch {
        lhs: &'static str,
        rhs: &'static str,
    },

    /// The operator is accepted by the grammar but not implemented (`in`)
    Unsupported(String),

    /// The operator text is outside the recognized set entirely
    UnknownOperator(String),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::FieldNotFound(field) => write!(f, "field not found: {}", field),
            MatchError::TypeMismatch { lhs, rhs } => {
                write!(f, "cannot compare {} with {}", lhs, rhs)
            }
            MatchError::Unsupported(op) => write!(f, "operator `{}` is not implemented", op),
            MatchError::UnknownOperator(op) => write!(f, "unknown operator `{}`", op),
        }
    }
}

impl std::error::Error for MatchError {}

impl Cond {
    /// Evaluates this condition against one row.
    ///
    /// The dispatch keeps the literal on the left: `a > 100` asks whether
    /// the literal `100` is less than the row's `a` cell. An absent field
    /// is a [`MatchError::FieldNotFound`], not `false`.
    pub fn matches(&self, row: &Row) -> Result<bool, MatchError> {
        let cell = row
            .get(&self.identifier)
            .ok_or_else(|| MatchError::FieldNotFound(self.identifier.clone()))?;
        match self.op.as_str() {
            ">" => self.value.lt(cell),
            "<" => self.value.gt(cell),
            ">=" => self.value.lte(cell),
            "<=" => self.value.gte(cell),
            "=" => self.value.equals(cell),
            "!=" => self.value.not_equals(cell),
            "in" => Err(MatchError::Unsupported(self.op.clone())),
            _ => Err(MatchError::UnknownOperator(self.op.clone())),
        }
    }
}

impl Query {
    /// Evaluates every condition against the row, folding with AND.
    ///
    /// Short-circuits on the first `false`; a query with no WHERE clause
    /// matches unconditionally. Any condition error fails the whole row.
    pub fn matches(&self, row: &Row) -> Result<bool, MatchError> {
        for cond in &self.conds {
            if !cond.matches(row)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns the rows matching this query, preserving input order.
    ///
    /// No limit, offset, ordering, or projection is applied. The first
    /// unevaluable row aborts the whole batch with its error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tql::{Query, Row, Value};
    ///
    /// let query = Query::parse("select * from t where a > 10").unwrap();
    /// let rows: Vec<Row> = (0..20)
    ///     .map(|n| Row::from([("a".to_string(), Value::Int(n))]))
    ///     .collect();
    /// assert_eq!(query.filter(&rows).unwrap().len(), 9);
    /// ```
    pub fn filter<'a>(&self, rows: &'a [Row]) -> Result<Vec<&'a Row>, MatchError> {
        let mut matched = Vec::new();
        for row in rows {
            if self.matches(row)? {
                matched.push(row);
            }
        }
        Ok(matched)
    }
}
