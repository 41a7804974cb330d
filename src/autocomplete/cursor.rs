use crate::*;

/// Where a completion applies: the grammar state in force at the end of the
/// input and the partial lexeme being typed there, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    state: LexState,
    prefix: String,
}

impl Cursor {
    /// Tokenize `input` as far as it goes and work out what is being completed.
    ///
    /// When the input ends inside a word or quoted string, that lexeme is the
    /// prefix and the state before it applies, whether or not the lexeme was
    /// accepted. When it ends on a boundary the current state applies with an
    /// empty prefix. Returns `Ok(None)` when nothing can be completed: a lex
    /// error anywhere, or a grammar error before the final lexeme.
    pub fn locate(input: &str) -> Result<Option<Self>> {
        let mut lexer = Lexer::new(input);
        let mut prior = lexer.state().clone();

        let failed = loop {
            let current = lexer.state().clone();
            match lexer.next_token() {
                Ok(Some(_)) => prior = current,
                Ok(None) => break false,
                Err(Error::Lex(error)) => {
                    debug!("No completion for {input:?}: {error}");
                    return Ok(None);
                }
                Err(Error::Grammar(error)) => {
                    trace!("Completion of {input:?} stopped at {error}");
                    prior = current;
                    break true;
                }
                Err(error) => return Err(error),
            }
        };

        let cursor = match lexer.last_lexeme() {
            Some(lexeme) if lexeme.end == input.len() && lexeme.kind != LexemeKind::Symbol => {
                Cursor {
                    state: prior,
                    prefix: lexeme.text.clone(),
                }
            }
            _ if failed => return Ok(None),
            _ => Cursor {
                state: lexer.state().clone(),
                prefix: String::new(),
            },
        };
        Ok(Some(cursor))
    }

    pub fn state(&self) -> &LexState {
        &self.state
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
