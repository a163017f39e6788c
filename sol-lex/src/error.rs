//! Lexical error kinds.
//!
//! A lexer never aborts on one of these: it latches the error and returns
//! an `Error` token so the caller (ultimately the parser) can decide how to
//! proceed.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unterminated string")]
    UnterminatedString,
    #[error("Unterminated character literal")]
    UnterminatedChar,
    #[error("Unterminated block comment")]
    UnterminatedBlockComment,
    #[error("Invalid token '..'")]
    InvalidEllipsis,
    #[error("Unexpected character")]
    UnexpectedCharacter,
}
