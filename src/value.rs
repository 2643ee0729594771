use crate::matcher::MatchError;

/// A typed literal in the TQL language.
///
/// Parsed literals and row cell contents share this representation, so a
/// condition's literal can be compared directly against the cell it
/// filters on. The comparison predicates are deliberately strict: every
/// pairing of kinds outside the documented ones is a
/// [`MatchError::TypeMismatch`], never a silent coercion.
///
/// # Examples
///
/// ```
/// use tql::Value;
///
/// let literal = Value::Int(100);
/// assert_eq!(literal.lt(&Value::Int(250)), Ok(true));
/// assert!(literal.lt(&Value::String("abc".to_string())).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Bare (unquoted) text
    String(String),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit IEEE float
    Float(f64),

    /// Text that appeared quoted in the query, quotes stripped and
    /// doubled-quote escapes collapsed
    QuotedString(String),

    /// Boolean literal (`true` / `false`)
    Bool(bool),

    /// The `null` literal
    Null,

    /// Identifier reference (reserved for future use)
    Reference(String),

    /// Parenthesized value list, as accepted after `in`
    List(Vec<Value>),
}

impl Value {
    /// Human-readable kind name, used in type-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::QuotedString(_) => "quoted string",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Reference(_) => "reference",
            Value::List(_) => "list",
        }
    }

    fn mismatch(&self, other: &Value) -> MatchError {
        MatchError::TypeMismatch {
            lhs: self.kind(),
            rhs: other.kind(),
        }
    }

    /// Strictly-less-than against a row cell. Defined for `Int` vs `Int`
    /// and `Float` vs `Float` only.
    pub fn lt(&self, other: &Value) -> Result<bool, MatchError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a < b),
            (Value::Float(a), Value::Float(b)) => Ok(a < b),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Strictly-greater-than against a row cell. Same kind rules as
    /// [`Value::lt`].
    pub fn gt(&self, other: &Value) -> Result<bool, MatchError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a > b),
            (Value::Float(a), Value::Float(b)) => Ok(a > b),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Less-than-or-equal, defined as the negation of [`Value::gt`], so
    /// equal values are inclusive on the bound by construction.
    pub fn lte(&self, other: &Value) -> Result<bool, MatchError> {
        Ok(!self.gt(other)?)
    }

    /// Greater-than-or-equal, defined as the negation of [`Value::lt`].
    pub fn gte(&self, other: &Value) -> Result<bool, MatchError> {
        Ok(!self.lt(other)?)
    }

    /// Equality against a row cell.
    ///
    /// Integers compare exactly; floats compare within an absolute
    /// difference of `1e-7`; a quoted string compares by exact text
    /// against a string or quoted-string cell. Everything else is a type
    /// mismatch.
    pub fn equals(&self, other: &Value) -> Result<bool, MatchError> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Ok(a == b),
            (Value::Float(a), Value::Float(b)) => Ok((a - b).abs() < 1e-7),
            (Value::QuotedString(a), Value::String(b))
            | (Value::QuotedString(a), Value::QuotedString(b)) => Ok(a == b),
            _ => Err(self.mismatch(other)),
        }
    }

    /// Inequality against a row cell: the negation of [`Value::equals`],
    /// over the same kind pairs and with the same float tolerance.
    pub fn not_equals(&self, other: &Value) -> Result<bool, MatchError> {
        Ok(!self.equals(other)?)
    }
}
