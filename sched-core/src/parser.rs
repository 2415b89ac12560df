//! One-token-lookahead cursor shared by the date and time grammars.
//!
//! The cursor pulls tokens lazily from a [`Tokens`](crate::scanner::Tokens)
//! stream. Every failed lookahead at the current position is remembered, so a
//! [`ParseError`] lists all kinds that would have been accepted there, not
//! just the last one tried.

use chrono::NaiveTime;

use crate::error::{ParseError, ScanError, SchedError, SchedResult};
use crate::token::{Token, TokenKind};

pub struct Parser<I> {
    tokens: I,
    current: Token,
    expected: Vec<TokenKind>,
}

impl<I> Parser<I>
where
    I: Iterator<Item = Result<Token, ScanError>>,
{
    pub fn new(mut tokens: I) -> SchedResult<Self> {
        let current = pull(&mut tokens)?;
        Ok(Parser {
            tokens,
            current,
            expected: Vec::new(),
        })
    }

    /// The token at the current position.
    pub fn current(&self) -> Token {
        self.current
    }

    /// Whether the current token is one of `kinds`, without consuming it.
    pub fn at(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.contains(&self.current.kind()) {
            return true;
        }
        for kind in kinds {
            if !self.expected.contains(kind) {
                self.expected.push(*kind);
            }
        }
        false
    }

    /// Consume and return the current token if it is one of `kinds`.
    pub fn accept(&mut self, kinds: &[TokenKind]) -> SchedResult<Option<Token>> {
        if !self.at(kinds) {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    /// Consume the current token if it is one of `kinds`.
    pub fn check(&mut self, kinds: &[TokenKind]) -> SchedResult<bool> {
        Ok(self.accept(kinds)?.is_some())
    }

    /// Consume the current token, which must be one of `kinds`.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> SchedResult<Token> {
        match self.accept(kinds)? {
            Some(token) => Ok(token),
            None => Err(self.unexpected()),
        }
    }

    pub fn accept_number(&mut self, kind: TokenKind) -> SchedResult<Option<u32>> {
        match self.accept(&[kind])? {
            Some(Token::Month(n) | Token::Weekday(n) | Token::Day(n)) => Ok(Some(n)),
            Some(_) | None => Ok(None),
        }
    }

    pub fn expect_number(&mut self, kind: TokenKind) -> SchedResult<u32> {
        match self.accept_number(kind)? {
            Some(n) => Ok(n),
            None => Err(self.unexpected()),
        }
    }

    pub fn expect_time(&mut self) -> SchedResult<NaiveTime> {
        match self.accept(&[TokenKind::Time])? {
            Some(Token::Time(time)) => Ok(time),
            Some(_) | None => Err(self.unexpected()),
        }
    }

    /// Error for the current token against everything tried at this position.
    pub fn unexpected(&self) -> SchedError {
        SchedError::Parse(ParseError {
            found: self.current,
            expected: self.expected.clone(),
        })
    }

    fn advance(&mut self) -> SchedResult<Token> {
        let next = pull(&mut self.tokens)?;
        self.expected.clear();
        Ok(std::mem::replace(&mut self.current, next))
    }
}

/// Next token; an exhausted stream keeps yielding `End`.
fn pull<I>(tokens: &mut I) -> Result<Token, ScanError>
where
    I: Iterator<Item = Result<Token, ScanError>>,
{
    tokens.next().unwrap_or(Ok(Token::End))
}
