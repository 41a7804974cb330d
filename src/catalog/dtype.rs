use crate::TokenType;

/// Kind of value a subject's verbs accept as arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DType {
    String,
    Int,
    Date,
    DateTime,
    Tag,
}

impl DType {
    /// Literal token kind that carries a value of this type.
    pub const fn token_type(self) -> TokenType {
        match self {
            DType::String => TokenType::String,
            DType::Int => TokenType::Int,
            DType::Date => TokenType::Date,
            DType::DateTime => TokenType::DateTime,
            DType::Tag => TokenType::Tag,
        }
    }
}
