//! Boolean tree of a call's argument list before it is bound to a subject.
use crate::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpr {
    Value(String),
    Unary {
        operator: Operator,
        operand: Box<ValueExpr>,
    },
    Binary {
        operator: Operator,
        left: Box<ValueExpr>,
        right: Box<ValueExpr>,
    },
}

impl ValueExpr {
    pub fn value(value: impl Into<String>) -> Self {
        ValueExpr::Value(value.into())
    }

    pub fn not(operand: ValueExpr) -> Self {
        ValueExpr::Unary {
            operator: Operator::Not,
            operand: Box::new(operand),
        }
    }

    pub fn binary(operator: Operator, left: ValueExpr, right: ValueExpr) -> Self {
        ValueExpr::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Bind every leaf to `subject.verb`, keeping the boolean structure.
    ///
    /// This is where verbs are checked: the lexer accepts any word as a verb.
    /// Names are resolved case- and underscore-insensitively, and conditions
    /// carry the subject's canonical name as their field. A subject that does
    /// not resolve is reported at position 0, since the names may not come
    /// from scanned input.
    pub fn transform(self, subject: &str, verb: &str) -> Result<QueryExpr, GrammarError> {
        let resolved = catalog::subject(subject).ok_or_else(|| GrammarError::InvalidSubject {
            lexeme: subject.to_string(),
            position: 0,
        })?;
        let operator = resolved
            .verb(verb)
            .ok_or_else(|| GrammarError::InvalidVerb {
                subject: resolved.name.to_string(),
                verb: verb.to_string(),
            })?
            .operator;
        Ok(self.bind(resolved.name, operator))
    }

    fn bind(self, field: &str, operator: Operator) -> QueryExpr {
        match self {
            ValueExpr::Value(value) => QueryExpr::condition(field, operator, value),
            ValueExpr::Unary {
                operator: op,
                operand,
            } => QueryExpr::unary(op, operand.bind(field, operator)),
            ValueExpr::Binary {
                operator: op,
                left,
                right,
            } => QueryExpr::binary(op, left.bind(field, operator), right.bind(field, operator)),
        }
    }
}
