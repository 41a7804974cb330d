use crate::TokenType;

/// A completion candidate. Variants mirror the grammar class it completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Suggestion {
    #[display("{_0}")]
    Subject(String),
    #[display("{_0}")]
    Verb(String),
    #[display("{_0}")]
    Connector(TokenType),
    #[display("{_0}")]
    Value(String),
}
pub type Suggestions = Vec<Suggestion>;
