//! Logical and comparison operators.
//!
//! The wire names (`equals`, `greaterThan`, `AND`, ...) are what travels in the
//! serialized form of a query, so they must stay stable. Comparisons also carry
//! the SQL symbol they compile to.
use crate::DecodeError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operator {
    // Logical
    And,
    Or,
    Xor,
    Not,
    // Comparison
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    GreaterThanOrEquals,
    LessThanOrEquals,
    // String
    Contains,
    StartsWith,
    EndsWith,
}

impl Operator {
    pub const ALL: [Self; 13] = [
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Not,
        Operator::Equals,
        Operator::NotEquals,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::GreaterThanOrEquals,
        Operator::LessThanOrEquals,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    /// Wire name of the operator.
    pub const fn name(self) -> &'static str {
        use Operator::*;
        match self {
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            Not => "NOT",
            Equals => "equals",
            NotEquals => "notEquals",
            GreaterThan => "greaterThan",
            LessThan => "lessThan",
            GreaterThanOrEquals => "greaterThanOrEquals",
            LessThanOrEquals => "lessThanOrEquals",
            Contains => "contains",
            StartsWith => "startsWith",
            EndsWith => "endsWith",
        }
    }

    /// SQL comparison symbol, for the operators that have one.
    pub const fn symbol(self) -> Option<&'static str> {
        use Operator::*;
        match self {
            Equals => Some("="),
            NotEquals => Some("!="),
            GreaterThan => Some(">"),
            LessThan => Some("<"),
            GreaterThanOrEquals => Some(">="),
            LessThanOrEquals => Some("<="),
            _ => None,
        }
    }

    /// Combines query expressions (`AND`, `OR`, `XOR`, `NOT`).
    pub const fn is_logical(self) -> bool {
        matches!(
            self,
            Operator::And | Operator::Or | Operator::Xor | Operator::Not
        )
    }

    /// Compares a field against a value inside a condition.
    pub const fn is_comparison(self) -> bool {
        !self.is_logical()
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = DecodeError;

    /// Accepts a wire name (any case), a comparison symbol, or the
    /// `before`/`after` verb names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("before") {
            return Ok(Operator::LessThan);
        }
        if s.eq_ignore_ascii_case("after") {
            return Ok(Operator::GreaterThan);
        }
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s) || op.symbol() == Some(s))
            .ok_or_else(|| DecodeError::UnknownOperator(s.to_string()))
    }
}

impl serde::Serialize for Operator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
