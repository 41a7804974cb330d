//! Cuts raw input into lexemes.
//!
//! A lexeme is a single-character symbol (`!`, `(`, `)`, `.`), a double-quoted
//! string, or a word: a run starting with an ASCII alphanumeric character and ending
//! at whitespace, a symbol or a quote. Words are not classified here; whether
//! `AND`, `2024-01-01` or `tag` is a connector, a date or a subject is decided
//! by the lexer against what it expects next.
use crate::*;

const SYMBOLS: [char; 4] = ['!', '(', ')', '.'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    Symbol,
    /// Terminated double-quoted string.
    Quoted,
    Word,
}

/// A raw lexeme with its byte span in the scanned input.
///
/// For quoted lexemes `text` holds the body with quotes removed and escapes
/// resolved; `start..end` still spans the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Lexeme {
    pub fn is_symbol(&self, symbol: char) -> bool {
        self.kind == LexemeKind::Symbol && self.text.starts_with(symbol)
    }

    pub fn is_word(&self) -> bool {
        self.kind == LexemeKind::Word
    }
}

#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Byte offset of the next unscanned character.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Scan the next lexeme, `Ok(None)` once only whitespace remains.
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme>, LexError> {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();

        let start = self.pos;
        let Some(c) = self.input[start..].chars().next() else {
            return Ok(None);
        };

        let lexeme = match c {
            c if SYMBOLS.contains(&c) => {
                self.pos += c.len_utf8();
                Lexeme {
                    kind: LexemeKind::Symbol,
                    text: c.to_string(),
                    start,
                    end: self.pos,
                }
            }
            '"' => self.quoted(start)?,
            c if c.is_ascii_alphanumeric() => self.word(start),
            character => {
                self.pos += character.len_utf8();
                return Err(LexError::InvalidCharacter {
                    character,
                    position: start,
                });
            }
        };

        trace!("Scanned {:?} {:?} at {}", lexeme.kind, lexeme.text, lexeme.start);
        Ok(Some(lexeme))
    }

    fn quoted(&mut self, start: usize) -> Result<Lexeme, LexError> {
        let body_start = start + 1;
        let mut body = String::new();
        let mut chars = self.input[body_start..].char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos = body_start + i + 1;
                    return Ok(Lexeme {
                        kind: LexemeKind::Quoted,
                        text: body,
                        start,
                        end: self.pos,
                    });
                }
                '\\' => match chars.next() {
                    Some((_, escaped @ ('"' | '\\'))) => body.push(escaped),
                    Some((_, other)) => {
                        body.push('\\');
                        body.push(other);
                    }
                    None => break,
                },
                c => body.push(c),
            }
        }

        self.pos = self.input.len();
        Err(LexError::UnterminatedString { position: start })
    }

    fn word(&mut self, start: usize) -> Lexeme {
        let rest = &self.input[start..];
        let len = rest
            .find(|c: char| c.is_whitespace() || c == '"' || SYMBOLS.contains(&c))
            .unwrap_or(rest.len());
        self.pos = start + len;
        Lexeme {
            kind: LexemeKind::Word,
            text: rest[..len].to_string(),
            start,
            end: self.pos,
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_lexeme().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        Scanner::new(input)
            .map(|l| l.expect("lexeme").text)
            .collect()
    }

    #[test]
    fn scans_calls_and_groups() {
        let input = "tag.equals(hello OR goodbye) OR (date.before(2024-01-08) AND date.after(2024-01-09)) ";
        assert_eq!(
            texts(input),
            [
                "tag", ".", "equals", "(", "hello", "OR", "goodbye", ")", "OR", "(", "date", ".",
                "before", "(", "2024-01-08", ")", "AND", "date", ".", "after", "(", "2024-01-09",
                ")", ")"
            ]
        );
    }

    #[test]
    fn keeps_date_times_in_one_word() {
        assert_eq!(texts("due.after(2024-01-01T10:00:00Z)")[4], "2024-01-01T10:00:00Z");
    }

    #[test]
    fn strips_quotes_and_resolves_escapes() {
        let lexemes: Vec<_> = Scanner::new(r#""hello \"world\"" OR "c\"\\runch" "a\nb""#)
            .collect::<Result<_, _>>()
            .expect("lexemes");
        assert_eq!(lexemes[0].kind, LexemeKind::Quoted);
        assert_eq!(lexemes[0].text, r#"hello "world""#);
        assert_eq!((lexemes[0].start, lexemes[0].end), (0, 17));
        assert_eq!(lexemes[1].text, "OR");
        assert_eq!(lexemes[2].text, r#"c"\runch"#);
        assert_eq!(lexemes[3].text, r"a\nb");
    }

    #[test]
    fn tracks_byte_spans() {
        let lexemes: Vec<_> = Scanner::new("  tag . eq")
            .collect::<Result<_, _>>()
            .expect("lexemes");
        let spans: Vec<_> = lexemes.iter().map(|l| (l.start, l.end)).collect();
        assert_eq!(spans, [(2, 5), (6, 7), (8, 10)]);
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let mut scanner = Scanner::new(" \t\n ");
        assert_eq!(scanner.next_lexeme(), Ok(None));
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn rejects_unterminated_strings() {
        let mut scanner = Scanner::new(r#"title.eq("abc"#);
        let result: Result<Vec<_>, _> = scanner.by_ref().collect();
        assert_eq!(result, Err(LexError::UnterminatedString { position: 9 }));
        assert_eq!(scanner.next_lexeme(), Ok(None));
    }

    #[test]
    fn rejects_a_trailing_escape() {
        assert_eq!(
            Scanner::new(r#""abc\"#).next_lexeme(),
            Err(LexError::UnterminatedString { position: 0 })
        );
    }

    #[test]
    fn words_start_with_ascii_alphanumerics_only() {
        let mut scanner = Scanner::new("due.before(٢٠٢٤-01-01)");
        let result: Result<Vec<_>, _> = scanner.by_ref().collect();
        assert_eq!(
            result,
            Err(LexError::InvalidCharacter {
                character: '٢',
                position: 11
            })
        );
        assert_eq!(
            Scanner::new("été").next_lexeme(),
            Err(LexError::InvalidCharacter {
                character: 'é',
                position: 0
            })
        );
    }

    #[test]
    fn rejects_invalid_leading_characters() {
        let mut scanner = Scanner::new("tag & due");
        assert!(scanner.next_lexeme().is_ok());
        assert_eq!(
            scanner.next_lexeme(),
            Err(LexError::InvalidCharacter {
                character: '&',
                position: 4
            })
        );
        assert_eq!(scanner.next_lexeme().map(|l| l.map(|l| l.text)), Ok(Some("due".into())));
    }
}
