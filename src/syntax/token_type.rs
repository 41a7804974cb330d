//! Closed set of token kinds.
//!
//! Variants are declared in matching priority order: when the lexer holds a set
//! of expected kinds it tries them in `Ord` order, so structural tokens win over
//! connectors, connectors over identifiers, and identifiers over literals. Among
//! literals the narrow shapes come first and `Tag`, which accepts any word, last.
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TokenType {
    #[display("!")]
    Bang,
    #[display("(")]
    LParen,
    #[display(")")]
    RParen,
    #[display(".")]
    Dot,
    #[display("AND")]
    And,
    #[display("OR")]
    Or,
    Subject,
    Verb,
    Bool,
    Int,
    DateTime,
    Date,
    String,
    Tag,
}

/// Token kinds ordered by matching priority.
pub type TokenSet = BTreeSet<TokenType>;

impl TokenType {
    /// Literal kinds that can stand as a call argument.
    pub const fn is_value(self) -> bool {
        matches!(
            self,
            TokenType::Bool
                | TokenType::Int
                | TokenType::DateTime
                | TokenType::Date
                | TokenType::String
                | TokenType::Tag
        )
    }

    pub const fn is_connector(self) -> bool {
        matches!(self, TokenType::And | TokenType::Or)
    }
}
