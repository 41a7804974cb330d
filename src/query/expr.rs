use crate::Operator;

/// A field-aware boolean query tree.
///
/// Serializes to the wire form: `{field, operator, value}` for conditions,
/// `{operand, operator}` for unary operations and `{left, right, op}` for
/// binary ones.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::Display, derive_more::From)]
#[serde(untagged)]
pub enum QueryExpr {
    Condition(Condition),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[display("{field} {operator} {value}")]
pub struct Condition {
    /// Column or subject name, resolved against the catalog when compiled.
    pub field: String,
    pub operator: Operator,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[display("{operator} ({operand})")]
pub struct UnaryOp {
    pub operator: Operator,
    pub operand: Box<QueryExpr>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, derive_more::Display)]
#[display("({left} {operator} {right})")]
pub struct BinaryOp {
    #[serde(rename = "op")]
    pub operator: Operator,
    pub left: Box<QueryExpr>,
    pub right: Box<QueryExpr>,
}

impl QueryExpr {
    pub fn condition(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<String>,
    ) -> Self {
        QueryExpr::Condition(Condition {
            field: field.into(),
            operator,
            value: value.into(),
        })
    }

    pub fn unary(operator: Operator, operand: QueryExpr) -> Self {
        QueryExpr::Unary(UnaryOp {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn binary(operator: Operator, left: QueryExpr, right: QueryExpr) -> Self {
        QueryExpr::Binary(BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn not(operand: QueryExpr) -> Self {
        Self::unary(Operator::Not, operand)
    }

    pub fn and(left: QueryExpr, right: QueryExpr) -> Self {
        Self::binary(Operator::And, left, right)
    }

    pub fn or(left: QueryExpr, right: QueryExpr) -> Self {
        Self::binary(Operator::Or, left, right)
    }

    pub fn xor(left: QueryExpr, right: QueryExpr) -> Self {
        Self::binary(Operator::Xor, left, right)
    }
}
