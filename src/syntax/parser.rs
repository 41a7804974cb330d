//! Recursive descent over typed tokens.
//!
//! ```text
//! query      := or_expr
//! or_expr    := and_expr ("OR" and_expr)*
//! and_expr   := not_expr ("AND" not_expr)*
//! not_expr   := ["!"] term
//! term       := "(" or_expr ")" | func_call
//! func_call  := subject "." verb "(" value_or ")"
//!
//! value_or   := value_and ("OR" value_and)*
//! value_and  := value_not ("AND" value_not)*
//! value_not  := ["!"] value_term
//! value_term := "(" value_or ")" | literal
//! ```
//!
//! Each call's argument tree is bound to its subject and verb as soon as the
//! call closes, so the result carries conditions rather than raw values.
use crate::*;

pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the whole token stream. Leftover tokens are an error.
    pub fn parse(mut self) -> Result<QueryExpr> {
        let expr = self.or_expr()?;
        if let Some(token) = self.peek() {
            return Err(ParseError::UnexpectedToken(Found(Some(token.clone()))).into());
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn eat(&mut self, kind: TokenType) -> Option<&'t Token> {
        let token = self.peek().filter(|t| t.is(kind))?;
        self.pos += 1;
        Some(token)
    }

    fn expect(
        &mut self,
        kind: TokenType,
        error: fn(Found) -> ParseError,
    ) -> Result<&'t Token, ParseError> {
        self.eat(kind)
            .ok_or_else(|| error(Found(self.peek().cloned())))
    }

    fn or_expr(&mut self) -> Result<QueryExpr> {
        let mut left = self.and_expr()?;
        while self.eat(TokenType::Or).is_some() {
            left = QueryExpr::or(left, self.and_expr()?);
        }
        Ok(left)
    }

    fn and_expr(&mut self) -> Result<QueryExpr> {
        let mut left = self.not_expr()?;
        while self.eat(TokenType::And).is_some() {
            left = QueryExpr::and(left, self.not_expr()?);
        }
        Ok(left)
    }

    fn not_expr(&mut self) -> Result<QueryExpr> {
        if self.eat(TokenType::Bang).is_some() {
            return Ok(QueryExpr::not(self.term()?));
        }
        self.term()
    }

    fn term(&mut self) -> Result<QueryExpr> {
        if self.eat(TokenType::LParen).is_some() {
            let expr = self.or_expr()?;
            self.expect(TokenType::RParen, ParseError::ExpectedRParen)?;
            return Ok(expr);
        }
        self.func_call()
    }

    fn func_call(&mut self) -> Result<QueryExpr> {
        let subject = self.expect(TokenType::Subject, ParseError::ExpectedSubject)?;
        self.expect(TokenType::Dot, ParseError::ExpectedDot)?;
        let verb = self.expect(TokenType::Verb, ParseError::ExpectedVerb)?;
        self.expect(TokenType::LParen, ParseError::ExpectedLParen)?;
        let value = self.value_or()?;
        self.expect(TokenType::RParen, ParseError::ExpectedRParen)?;
        Ok(value.transform(&subject.literal, &verb.literal)?)
    }

    fn value_or(&mut self) -> Result<ValueExpr> {
        let mut left = self.value_and()?;
        while self.eat(TokenType::Or).is_some() {
            left = ValueExpr::binary(Operator::Or, left, self.value_and()?);
        }
        Ok(left)
    }

    fn value_and(&mut self) -> Result<ValueExpr> {
        let mut left = self.value_not()?;
        while self.eat(TokenType::And).is_some() {
            left = ValueExpr::binary(Operator::And, left, self.value_not()?);
        }
        Ok(left)
    }

    fn value_not(&mut self) -> Result<ValueExpr> {
        if self.eat(TokenType::Bang).is_some() {
            return Ok(ValueExpr::not(self.value_term()?));
        }
        self.value_term()
    }

    fn value_term(&mut self) -> Result<ValueExpr> {
        if self.eat(TokenType::LParen).is_some() {
            let value = self.value_or()?;
            self.expect(TokenType::RParen, ParseError::ExpectedRParen)?;
            return Ok(value);
        }
        match self.peek() {
            Some(token) if token.kind.is_value() => {
                self.pos += 1;
                Ok(ValueExpr::value(token.literal.clone()))
            }
            other => Err(ParseError::ExpectedValue(Found(other.cloned())).into()),
        }
    }
}
