//! Front end of the query language: scanning, grammar-aware tokenizing and parsing.
//!
//! Modules:
//! - `scanner`    : raw input to [`Lexeme`]s (symbols, quoted strings, words).
//! - `token_type` : the closed set of [`TokenType`]s, in matching priority order.
//! - `token`      : [`Token`], a typed and positioned lexeme.
//! - `lexer`      : [`Lexer`] and the [`LexState`] transition table deciding what may come next.
//! - `value_expr` : [`ValueExpr`], the argument tree of a call before it is bound to a subject.
//! - `parser`     : recursive descent from tokens to a bound [`crate::QueryExpr`].
//!
//! The lexer's state is the only record of "what is legal next"; the parser and
//! the autocomplete engine both consume it rather than re-deriving it.
//!
//! Example:
//! ```rust
//! use ntql::{Lexer, Parser, TokenType};
//!
//! let tokens = Lexer::new("tag.eq(work)").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenType::Subject);
//! let expr = Parser::new(&tokens).parse().unwrap();
//! assert_eq!(expr.to_string(), "tag equals work");
//! ```

pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod token;
pub mod token_type;
pub mod value_expr;

pub use lexer::{LexState, Lexer};
pub use parser::Parser;
pub use scanner::{Lexeme, LexemeKind, Scanner};
pub use token::Token;
pub use token_type::{TokenSet, TokenType};
pub use value_expr::ValueExpr;
