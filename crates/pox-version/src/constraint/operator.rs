//! Operator types for version constraints

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (=, ==, or no operator)
    Equal,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=, =<)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=, =>)
    GreaterThanOrEqual,
    /// Tilde range (~)
    Tilde,
    /// Caret range (^)
    Caret,
    /// Pessimistic range (~>), relaxed versions only
    Pessimistic,
}

/// Operator tokens accepted by the strict grammar, longest first
pub(crate) const STRICT_OPERATORS: &[&str] = &[
    ">=", "=>", "<=", "=<", "!=", "==", ">", "<", "=", "~", "^",
];

/// Operator tokens accepted by the relaxed grammar, longest first
pub(crate) const RELAXED_OPERATORS: &[&str] = &[
    ">=", "=>", "<=", "=<", "!=", "==", "~>", ">", "<", "=", "~", "^",
];

impl Operator {
    /// Get the canonical string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
            Operator::Pessimistic => "~>",
        }
    }

    /// Get all supported operator tokens
    pub fn supported_operators() -> &'static [&'static str] {
        RELAXED_OPERATORS
    }
}

impl FromStr for Operator {
    type Err = Error;

    /// Parse an operator token; the empty token means equality
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "=" | "==" => Ok(Operator::Equal),
            "!=" => Ok(Operator::NotEqual),
            "<" => Ok(Operator::LessThan),
            "<=" | "=<" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" | "=>" => Ok(Operator::GreaterThanOrEqual),
            "~" => Ok(Operator::Tilde),
            "^" => Ok(Operator::Caret),
            "~>" => Ok(Operator::Pessimistic),
            _ => Err(Error::MalformedConstraint(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
