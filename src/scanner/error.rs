//! Error types for constructing a token stream.
use std::fmt::{Display, Formatter};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character: {0:?}")]
    UnexpectedCharacter(char),
    #[error("Invalid number literal: {0}")]
    InvalidNumber(String),
}

/// A recoverable lexical error, located by the 1-indexed line on which
/// the offending lexeme started.
#[derive(Debug, Error, PartialEq, Eq)]
pub struct ScanError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl ScanError {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))
    }
}
