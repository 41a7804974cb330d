//! A lexeme after the lexer has typed it against the grammar.
use crate::TokenType;

/// Typed token. `literal` is the lexeme text (quotes stripped for strings) and
/// `position` the byte offset of the lexeme in the input.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{kind} {literal:?}")]
pub struct Token {
    pub kind: TokenType,
    pub literal: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenType, literal: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenType) -> bool {
        self.kind == kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_kind_and_literal() {
        let token = Token::new(TokenType::Subject, "tag", 1);
        assert_eq!(token.to_string(), r#"Subject "tag""#);
        assert!(token.is(TokenType::Subject));
        assert!(!token.is(TokenType::Verb));
    }
}
