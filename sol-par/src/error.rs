//! Syntactic error kinds.
//!
//! Mirrors [`sol_lex::LexError`]'s latch-don't-abort contract: a parse
//! error is recorded on the parser and parsing continues from the next
//! synchronization point rather than unwinding.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Invalid assignment target")]
    InvalidAssignmentTarget,

    #[error("Expected expression")]
    ExpectedExpression,

    #[error("Lexical error")]
    LexicalError,

    #[error("Arena exhausted while building the AST")]
    ArenaExhausted,
}
