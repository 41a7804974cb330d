use crate::{Operator, Token, TokenType};
use itertools::Itertools as _;
use sqlparser::parser::ParserError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Invalid SQL: {0}")]
    InvalidSql(ParserError),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

impl From<ParserError> for Error {
    fn from(value: ParserError) -> Self {
        Error::InvalidSql(value)
    }
}

/// Faults raised while cutting raw input into lexemes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: usize },
}

/// A lexeme that the grammar does not allow where it appears.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("invalid subject `{lexeme}` at position {position}")]
    InvalidSubject { lexeme: String, position: usize },

    #[error("invalid verb `{verb}` for subject `{subject}`")]
    InvalidVerb { subject: String, verb: String },

    #[error(
        "invalid lexeme `{lexeme}` at position {position}: expected one of [{}]",
        .expected.iter().join(", ")
    )]
    InvalidToken {
        expected: Vec<TokenType>,
        lexeme: String,
        position: usize,
    },
}

/// What the parser ran into instead of the construct it needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found(pub Option<Token>);

impl std::fmt::Display for Found {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Some(token) => write!(f, "{token} at position {}", token.position),
            None => f.write_str("end of input"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected subject, found {0}")]
    ExpectedSubject(Found),

    #[error("expected `.`, found {0}")]
    ExpectedDot(Found),

    #[error("expected verb, found {0}")]
    ExpectedVerb(Found),

    #[error("expected `(`, found {0}")]
    ExpectedLParen(Found),

    #[error("expected `)`, found {0}")]
    ExpectedRParen(Found),

    #[error("expected value, found {0}")]
    ExpectedValue(Found),

    #[error("unexpected {0} after end of query")]
    UnexpectedToken(Found),
}

impl ParseError {
    /// The offending token, `None` when the input ended early.
    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::ExpectedSubject(found)
            | ParseError::ExpectedDot(found)
            | ParseError::ExpectedVerb(found)
            | ParseError::ExpectedLParen(found)
            | ParseError::ExpectedRParen(found)
            | ParseError::ExpectedValue(found)
            | ParseError::UnexpectedToken(found) => found.0.as_ref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("operator `{operator}` is not allowed for field `{field}` (value `{value}`)")]
    InvalidOperator {
        field: String,
        operator: Operator,
        value: String,
    },

    #[error("invalid value `{value}` for field `{field}` with operator `{operator}`")]
    InvalidValue {
        field: String,
        operator: Operator,
        value: String,
    },

    #[error("operator `{operator}` cannot combine expressions")]
    InvalidConnective { operator: Operator },
}

/// Problems rebuilding a [`crate::QueryExpr`] from its untyped wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty query")]
    Empty,

    #[error("expected an object, found {0}")]
    NotAnObject(String),

    #[error("key `{key}` must be {expected}")]
    InvalidKey {
        key: &'static str,
        expected: &'static str,
    },

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    #[error("object is neither a condition, a binary nor a unary operation")]
    UnrecognizedShape,
}
