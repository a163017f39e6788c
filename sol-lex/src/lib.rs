//! Tokenizer for the language's source text.
//!
//! Turns a `&str` buffer into a stream of [`Token`](sol_util::Token)s one
//! call at a time. Never panics on malformed input: unterminated strings,
//! unterminated block comments, unterminated character literals, a stray
//! `..`, and unrecognized characters all latch an error and surface as an
//! `Error` token so a caller can keep going (or stop) on its own terms.

pub mod cursor;
pub mod error;
mod lexer;

pub use cursor::{Cursor, CursorSnapshot};
pub use error::LexError;
pub use lexer::Lexer;
