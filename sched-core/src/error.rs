//! Error types for schedule parsing.

use std::fmt;

use thiserror::Error;

use crate::token::{Token, TokenKind, describe_kinds};

/// Text the scanner could not turn into tokens.
///
/// `offset` is the byte position where no rule matched; everything before it
/// was recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub text: String,
    pub offset: usize,
}

impl ScanError {
    pub fn consumed(&self) -> &str {
        &self.text[..self.offset]
    }

    pub fn remainder(&self) -> &str {
        &self.text[self.offset..]
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recognized so far: '{}', could not understand: '{}'",
            self.consumed(),
            self.remainder()
        )
    }
}

impl std::error::Error for ScanError {}

/// A well-formed token stream in the wrong grammatical shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected one of {}, found {found}", describe_kinds(.expected))]
pub struct ParseError {
    pub found: Token,
    pub expected: Vec<TokenKind>,
}

/// Errors that can occur while reading a schedule.
#[derive(Error, Debug)]
pub enum SchedError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Invalid date: {year}-{month:02}-{day:02} does not exist")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Malformed line: expected 3 '|'-separated fields, found {0}")]
    MalformedLine(usize),

    #[error("Line {number}: {source}\n\t{line}")]
    Line {
        number: usize,
        line: String,
        #[source]
        source: Box<SchedError>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SchedError {
    /// Strip any line-number wrapping and return the underlying error.
    pub fn root(&self) -> &SchedError {
        match self {
            SchedError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Result type alias for schedule operations.
pub type SchedResult<T> = Result<T, SchedError>;
