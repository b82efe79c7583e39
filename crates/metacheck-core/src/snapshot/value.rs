use std::fmt;

use crate::errors::{McError, MetaCheckError, Result};

/// Typed scalar column value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Numeric view used by count/sum checks; NULL counts as zero
    ///
    /// # Errors
    ///
    /// `UnexpectedValue` for text that does not parse as an integer, and for
    /// reals that are fractional, non-finite or outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64> {
        match self {
            Value::Null => Ok(0),
            Value::Integer(i) => Ok(*i),
            Value::Real(f) => real_to_i64(*f),
            Value::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                McError::from(MetaCheckError::NonNumericScalar {
                    found: format!("text '{}'", s),
                })
            }),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

fn real_to_i64(f: f64) -> Result<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Ok(f as i64)
    } else {
        Err(McError::from(MetaCheckError::NonNumericScalar {
            found: format!("real {}", f),
        }))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// One result row, columns in select order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row(Vec<Value>);

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Column by index; out-of-range reads as NULL
    pub fn get(&self, idx: usize) -> &Value {
        self.0.get(idx).unwrap_or(&Value::Null)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }
}
