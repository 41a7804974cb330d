//! Grammar-aware tokenizer.
//!
//! [`LexState`] holds everything that decides what may legally come next: the
//! expected token kinds, the call depth, open grouping parens and the subject
//! whose value types apply. [`LexState::accept`] is the single transition
//! table; the parser consumes its output and the autocomplete engine inspects
//! its state, so both always agree on the grammar.
use crate::*;
use regex::Regex;
use std::sync::LazyLock;

static INT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid regex"));
static DATE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}Z?$").expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexState {
    /// Open parens inside a call's argument list.
    depth: usize,
    /// Open top-level grouping parens.
    groups: usize,
    expected: TokenSet,
    subject: Option<&'static Subject>,
    last: Option<TokenType>,
}

impl Default for LexState {
    fn default() -> Self {
        Self {
            depth: 0,
            groups: 0,
            expected: TokenSet::from([TokenType::Bang, TokenType::LParen, TokenType::Subject]),
            subject: None,
            last: None,
        }
    }
}

impl LexState {
    pub fn expected(&self) -> &TokenSet {
        &self.expected
    }

    pub fn expects(&self, kind: TokenType) -> bool {
        self.expected.contains(&kind)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The most recently resolved subject.
    pub fn subject(&self) -> Option<&'static Subject> {
        self.subject
    }

    /// Value types of the active subject, empty before one is resolved.
    pub fn value_types(&self) -> &'static [DType] {
        self.subject.map(|s| s.types).unwrap_or_default()
    }

    /// Kind of the last accepted token.
    pub fn last(&self) -> Option<TokenType> {
        self.last
    }

    /// Type `lexeme` against the expected kinds and advance to the next state.
    pub fn accept(&mut self, lexeme: &Lexeme) -> Result<Token, GrammarError> {
        let Some(kind) = self
            .expected
            .iter()
            .copied()
            .find(|kind| Self::shape_matches(*kind, lexeme))
        else {
            return Err(GrammarError::InvalidToken {
                expected: self.expected.iter().copied().collect(),
                lexeme: lexeme.text.clone(),
                position: lexeme.start,
            });
        };

        let subject = match kind {
            TokenType::Subject => Some(catalog::subject(&lexeme.text).ok_or_else(|| {
                GrammarError::InvalidSubject {
                    lexeme: lexeme.text.clone(),
                    position: lexeme.start,
                }
            })?),
            _ => None,
        };

        self.advance(kind, subject);
        let token = Token::new(kind, lexeme.text.clone(), lexeme.start);
        trace!("Accepted {token}, expecting {:?}", self.expected);
        Ok(token)
    }

    fn shape_matches(kind: TokenType, lexeme: &Lexeme) -> bool {
        let text = lexeme.text.as_str();
        match kind {
            TokenType::Bang => lexeme.is_symbol('!'),
            TokenType::LParen => lexeme.is_symbol('('),
            TokenType::RParen => lexeme.is_symbol(')'),
            TokenType::Dot => lexeme.is_symbol('.'),
            TokenType::And => lexeme.is_word() && text.eq_ignore_ascii_case("and"),
            TokenType::Or => lexeme.is_word() && text.eq_ignore_ascii_case("or"),
            TokenType::Subject | TokenType::Verb => lexeme.is_word(),
            TokenType::Bool => lexeme.is_word() && matches!(text, "true" | "false"),
            TokenType::Int => lexeme.is_word() && INT.is_match(text),
            TokenType::DateTime => lexeme.is_word() && DATE_TIME.is_match(text),
            TokenType::Date => lexeme.is_word() && DATE.is_match(text),
            TokenType::String => lexeme.kind == LexemeKind::Quoted,
            TokenType::Tag => matches!(lexeme.kind, LexemeKind::Word | LexemeKind::Quoted),
        }
    }

    fn advance(&mut self, kind: TokenType, subject: Option<&'static Subject>) {
        match kind {
            TokenType::Subject => {
                self.subject = subject;
                self.expected = TokenSet::from([TokenType::Dot]);
            }
            TokenType::Dot => self.expected = TokenSet::from([TokenType::Verb]),
            TokenType::Verb => self.expected = TokenSet::from([TokenType::LParen]),
            TokenType::LParen if self.last == Some(TokenType::Verb) || self.depth > 0 => {
                self.depth += 1;
                self.expected = self.operands();
            }
            TokenType::LParen => self.groups += 1,
            TokenType::RParen => {
                if self.depth > 0 {
                    self.depth -= 1;
                } else {
                    self.groups = self.groups.saturating_sub(1);
                }
                self.expected = self.closers();
            }
            TokenType::And | TokenType::Or if self.depth > 0 => self.expected = self.operands(),
            TokenType::And | TokenType::Or => {
                self.expected =
                    TokenSet::from([TokenType::Bang, TokenType::LParen, TokenType::Subject]);
            }
            TokenType::Bang => {}
            _ => self.expected = self.closers(),
        }
        self.last = Some(kind);
    }

    /// What may start an operand inside a call: a group, a negation or a value.
    fn operands(&self) -> TokenSet {
        let mut set = TokenSet::from([TokenType::Bang, TokenType::LParen]);
        set.extend(self.value_types().iter().map(|t| t.token_type()));
        set
    }

    /// What may follow a complete operand. `)` only while one is open.
    fn closers(&self) -> TokenSet {
        let mut set = TokenSet::from([TokenType::And, TokenType::Or]);
        if self.depth > 0 || self.groups > 0 {
            set.insert(TokenType::RParen);
        }
        set
    }
}

/// Streams typed tokens out of raw input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    scanner: Scanner<'a>,
    state: LexState,
    last_lexeme: Option<Lexeme>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
            state: LexState::default(),
            last_lexeme: None,
        }
    }

    pub fn state(&self) -> &LexState {
        &self.state
    }

    /// The last lexeme scanned, whether or not it was accepted.
    pub fn last_lexeme(&self) -> Option<&Lexeme> {
        self.last_lexeme.as_ref()
    }

    /// Next token, `Ok(None)` at end of input.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        let Some(lexeme) = self.scanner.next_lexeme()? else {
            return Ok(None);
        };
        let lexeme = self.last_lexeme.insert(lexeme);
        Ok(Some(self.state.accept(lexeme)?))
    }

    /// Tokenize the whole input, failing on the first lex or grammar error.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
