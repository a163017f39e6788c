//! The `Parser` type: token-stream plumbing, error latching, and panic-mode
//! synchronization. The grammar itself lives in `expr.rs` (the precedence
//! ladder) and `stmt.rs` (declarations, statements, the top-level loop).

use sol_lex::Lexer;
use sol_util::{Arena, Position, Token, TokenKind};

use crate::error::ParseError;

/// Recursive-descent parser with one-token lookahead.
///
/// Borrows an external [`Arena`] rather than owning one: the caller creates
/// the arena, so AST references can outlive the `Parser` itself (the parser
/// is a transient cursor over the lexer; the arena and the tree it grows are
/// not). Mirrors the split used throughout this workspace — an allocator
/// created by the caller, borrowed by the thing that fills it.
///
/// `'src: 'ast` because `Position`s and interned lexemes copied from tokens
/// flow straight into AST nodes tagged `'ast` — the source buffer must
/// outlive the arena for that to be a widening, not a dangling reference.
pub struct Parser<'src, 'ast>
where
    'src: 'ast,
{
    pub(crate) lexer: Lexer<'src>,
    pub(crate) arena: &'ast Arena,
    pub(crate) current: Token<'src>,
    previous_kind: Option<TokenKind>,
    had_error: bool,
    panic_mode: bool,
    error_message: Option<String>,
}

impl<'src, 'ast> Parser<'src, 'ast>
where
    'src: 'ast,
{
    /// Primes the first token, skipping any leading `NEWLINE`s. A lexical
    /// error encountered while priming is latched the same way a mid-parse
    /// one is, but does not put the parser in panic mode — there is no
    /// statement yet to synchronize out of.
    pub fn new(mut lexer: Lexer<'src>, arena: &'ast Arena) -> Self {
        let first = lexer.next_token();
        let mut parser = Self {
            lexer,
            arena,
            current: first,
            previous_kind: None,
            had_error: false,
            panic_mode: false,
            error_message: None,
        };
        parser.prime();
        parser
    }

    fn prime(&mut self) {
        while matches!(self.current.kind, TokenKind::Newline | TokenKind::Error) {
            if self.current.kind == TokenKind::Error {
                self.report(self.current.position, ParseError::LexicalError);
            }
            self.current = self.lexer.next_token();
        }
        self.panic_mode = false;
    }

    pub fn has_error(&self) -> bool {
        self.had_error
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub(crate) fn in_panic_mode(&self) -> bool {
        self.panic_mode
    }

    pub(crate) fn previous_kind(&self) -> Option<TokenKind> {
        self.previous_kind
    }

    /// Clears panic mode once `stmt.rs`'s `synchronize` has found a sync
    /// point. Parsing of independent later statements can now surface
    /// their own errors again.
    pub(crate) fn reset_panic_mode(&mut self) {
        self.panic_mode = false;
    }

    /// Advances past the current token. Any `ERROR` token the lexer produces
    /// along the way is skipped and recorded as one "Lexical error" parse
    /// error — this is the "Lexer error tokens" rule from the error-handling
    /// design: the parser never sees an `Error` kind in `current`.
    pub(crate) fn bump(&mut self) {
        self.previous_kind = Some(self.current.kind);
        loop {
            let tok = self.lexer.next_token();
            if tok.kind == TokenKind::Error {
                self.report(tok.position, ParseError::LexicalError);
                continue;
            }
            self.current = tok;
            return;
        }
    }

    /// Consumes `current` if it matches `kind`; otherwise latches a parse
    /// error and leaves `current` untouched so the caller's partial node can
    /// still be built and panic-mode recovery has something to skip from.
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Option<Token<'src>> {
        if self.current.kind == kind {
            let tok = self.current;
            self.bump();
            Some(tok)
        } else {
            let found = format!("{:?}", self.current.kind);
            self.error_at_current(ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found,
            });
            None
        }
    }

    /// Records a parse error at `current`'s position. A no-op while already
    /// in panic mode, and the message buffer keeps only the first error
    /// encountered; both rules exist so a single mistake doesn't drown
    /// independent later errors in noise.
    pub(crate) fn error_at_current(&mut self, error: ParseError) {
        self.report(self.current.position, error);
    }

    fn report(&mut self, position: Position<'src>, error: ParseError) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;
        if self.error_message.is_none() {
            self.error_message = Some(format!("Error at {}: {}", position, error));
        }
    }

    /// Allocates an AST node in the parser's arena, latching
    /// `ArenaExhausted` and returning `None` on failure so exhaustion
    /// propagates like any other parse error instead of panicking.
    pub(crate) fn alloc<T>(&mut self, value: T) -> Option<&'ast T> {
        match self.arena.alloc(value) {
            Ok(node) => Some(node),
            Err(err) => {
                tracing::debug!(used = self.arena.used(), %err, "parser arena exhausted");
                self.error_at_current(ParseError::ArenaExhausted);
                None
            }
        }
    }

    /// Copies a `&str` into the parser's arena. Used for identifier names
    /// and string literal bodies so the AST no longer aliases the lexer's
    /// source buffer once the lexer is gone.
    pub(crate) fn intern(&mut self, bytes: &[u8]) -> Option<&'ast str> {
        match self.arena.intern_str(bytes) {
            Ok(s) => Some(s),
            Err(err) => {
                tracing::debug!(used = self.arena.used(), %err, "parser arena exhausted");
                self.error_at_current(ParseError::ArenaExhausted);
                None
            }
        }
    }
}
