//! The tokenizer.
//!
//! One token per call to [`Lexer::next_token`], driven by a single-character
//! dispatch after whitespace/comments are skipped. See the module-level
//! scanning steps mirrored in the individual `scan_*` methods below.

use sol_util::{lookup_keyword, Arena, LiteralValue, Position, Token, TokenKind};

use crate::cursor::Cursor;
use crate::error::LexError;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Turns a source buffer into a lazy sequence of tokens.
///
/// Owns one [`Arena`] used exclusively for [`Lexer::intern_string`]; it is
/// never shared with a parser's arena.
pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    filename: &'src str,
    arena: Arena,
    has_error: bool,
    last_error: Option<LexError>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, filename: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            filename,
            arena: Arena::new(),
            has_error: false,
            last_error: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn error_message(&self) -> Option<String> {
        self.last_error.map(|e| e.to_string())
    }

    /// Copies `bytes` into the lexer's arena, appending a terminating
    /// sentinel byte. No deduplication is performed.
    pub fn intern_string(&self, bytes: &[u8], len: usize) -> Option<&str> {
        match self.arena.intern_str(&bytes[..len]) {
            Ok(s) => Some(s),
            Err(err) => {
                tracing::debug!(requested = len, used = self.arena.used(), %err, "lexer arena exhausted");
                None
            }
        }
    }

    /// Returns the next token without advancing, by snapshotting the full
    /// lexer state, scanning one token, then restoring it.
    pub fn peek_token(&mut self) -> Token<'src> {
        let cursor_snapshot = self.cursor.snapshot();
        let had_error = self.has_error;
        let last_error = self.last_error;
        let token = self.next_token();
        self.cursor.restore(cursor_snapshot);
        self.has_error = had_error;
        self.last_error = last_error;
        token
    }

    /// Scans and returns the next token. Once `Eof` has been returned,
    /// every subsequent call returns `Eof` again.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Err((line, column, start)) = self.skip_whitespace_and_comments() {
            return self.latch_error(start, line, column, LexError::UnterminatedBlockComment);
        }

        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        tracing::trace!(line, column, "scanning token");

        if self.cursor.is_at_end() {
            return self.make_token(TokenKind::Eof, start, line, column, None);
        }

        let c = self.cursor.current_char();

        if is_ident_start(c) {
            return self.scan_identifier(start, line, column);
        }
        if c.is_ascii_digit() {
            return self.scan_number(start, line, column);
        }
        if c == '"' {
            self.cursor.advance();
            return self.scan_string(start, line, column);
        }
        if c == '\'' {
            self.cursor.advance();
            return self.scan_char(start, line, column);
        }

        self.cursor.advance();
        self.scan_operator_or_delimiter(c, start, line, column)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), (u32, u32, usize)> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }
            match self.cursor.current_char() {
                ' ' | '\r' | '\t' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.char_at(1) == '/' => {
                    while self.cursor.current_char() != '\n' && !self.cursor.is_at_end() {
                        self.cursor.advance();
                    }
                }
                '/' if self.cursor.char_at(1) == '*' => {
                    let start = self.cursor.position();
                    let line = self.cursor.line();
                    let column = self.cursor.column();
                    self.cursor.advance();
                    self.cursor.advance();
                    loop {
                        if self.cursor.is_at_end() {
                            return Err((line, column, start));
                        }
                        if self.cursor.current_char() == '*' && self.cursor.char_at(1) == '/' {
                            self.cursor.advance();
                            self.cursor.advance();
                            break;
                        }
                        self.cursor.advance();
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_identifier(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice_from(start);
        let kind = lookup_keyword(lexeme).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, start, line, column, None)
    }

    fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        let mut base: u32 = 10;
        let mut is_float = false;

        if self.cursor.current_char() == '0' {
            match self.cursor.char_at(1) {
                'x' | 'X' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    base = 16;
                    while self.cursor.current_char().is_ascii_hexdigit() {
                        self.cursor.advance();
                    }
                }
                'b' | 'B' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    base = 2;
                    while matches!(self.cursor.current_char(), '0' | '1') {
                        self.cursor.advance();
                    }
                }
                'o' | 'O' => {
                    self.cursor.advance();
                    self.cursor.advance();
                    base = 8;
                    while matches!(self.cursor.current_char(), '0'..='7') {
                        self.cursor.advance();
                    }
                }
                _ => self.scan_decimal_tail(&mut is_float),
            }
        } else {
            self.scan_decimal_tail(&mut is_float);
        }

        let lexeme = self.cursor.slice_from(start);
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        let literal = if is_float {
            lexeme.parse::<f64>().ok().map(LiteralValue::Float)
        } else {
            let digits = strip_base_prefix(lexeme, base);
            i64::from_str_radix(digits, base).ok().map(LiteralValue::Int)
        };
        self.make_token(kind, start, line, column, literal)
    }

    fn scan_decimal_tail(&mut self, is_float: &mut bool) {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '.' && self.cursor.char_at(1).is_ascii_digit() {
            *is_float = true;
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }
        let c = self.cursor.current_char();
        if c == 'e' || c == 'E' {
            let next = self.cursor.char_at(1);
            if next.is_ascii_digit() || next == '+' || next == '-' {
                *is_float = true;
                self.cursor.advance();
                if matches!(self.cursor.current_char(), '+' | '-') {
                    self.cursor.advance();
                }
                while self.cursor.current_char().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }
    }

    fn scan_string(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        while self.cursor.current_char() != '"' && !self.cursor.is_at_end() {
            if self.cursor.current_char() == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    break;
                }
                match self.cursor.current_char() {
                    'n' | 't' | 'r' | '\\' | '"' | '\'' | '0' => self.cursor.advance(),
                    'x' => {
                        self.cursor.advance();
                        for _ in 0..2 {
                            if self.cursor.current_char().is_ascii_hexdigit() {
                                self.cursor.advance();
                            } else {
                                break;
                            }
                        }
                    }
                    'u' => {
                        self.cursor.advance();
                        for _ in 0..4 {
                            if self.cursor.current_char().is_ascii_hexdigit() {
                                self.cursor.advance();
                            } else {
                                break;
                            }
                        }
                    }
                    // Unknown escape: consume the next byte and keep going.
                    // Not an error; the raw escape stays in the lexeme.
                    _ => self.cursor.advance(),
                }
            } else {
                // Also handles embedded newlines: Cursor::advance already
                // bumps line/column on '\n', so no special case is needed
                // here. An embedded newline is not an error.
                self.cursor.advance();
            }
        }

        if self.cursor.is_at_end() {
            return self.latch_error(start, line, column, LexError::UnterminatedString);
        }

        self.cursor.advance(); // closing quote
        self.make_token(TokenKind::StringLit, start, line, column, None)
    }

    fn scan_char(&mut self, start: usize, line: u32, column: u32) -> Token<'src> {
        if self.cursor.current_char() == '\\' {
            self.cursor.advance(); // backslash
            self.cursor.advance(); // escaped character
        } else if self.cursor.current_char() != '\'' {
            self.cursor.advance(); // plain character
        }

        if !self.cursor.match_char('\'') {
            return self.latch_error(start, line, column, LexError::UnterminatedChar);
        }

        self.make_token(TokenKind::CharLit, start, line, column, None)
    }

    fn scan_operator_or_delimiter(
        &mut self,
        c: char,
        start: usize,
        line: u32,
        column: u32,
    ) -> Token<'src> {
        use TokenKind::*;

        let kind = match c {
            '(' => LParen,
            ')' => RParen,
            '{' => LBrace,
            '}' => RBrace,
            '[' => LBracket,
            ']' => RBracket,
            ';' => Semicolon,
            ',' => Comma,
            '~' => Tilde,
            '?' => Question,
            '#' => Hash,
            '\n' => Newline,
            '.' => {
                if self.cursor.match_char('.') {
                    if self.cursor.match_char('.') {
                        Ellipsis
                    } else {
                        return self.latch_error(start, line, column, LexError::InvalidEllipsis);
                    }
                } else {
                    Dot
                }
            }
            ':' => {
                if self.cursor.match_char(':') {
                    Scope
                } else {
                    Colon
                }
            }
            '^' => {
                if self.cursor.match_char('=') {
                    XorAssign
                } else {
                    Xor
                }
            }
            '+' => {
                if self.cursor.match_char('+') {
                    Increment
                } else if self.cursor.match_char('=') {
                    PlusAssign
                } else {
                    Plus
                }
            }
            '-' => {
                if self.cursor.match_char('-') {
                    Decrement
                } else if self.cursor.match_char('=') {
                    MinusAssign
                } else if self.cursor.match_char('>') {
                    Arrow
                } else {
                    Minus
                }
            }
            '*' => {
                if self.cursor.match_char('=') {
                    StarAssign
                } else if self.cursor.match_char('*') {
                    if self.cursor.match_char('=') {
                        PowerAssign
                    } else {
                        Power
                    }
                } else {
                    Star
                }
            }
            '/' => {
                if self.cursor.match_char('=') {
                    SlashAssign
                } else {
                    Slash
                }
            }
            '%' => {
                if self.cursor.match_char('=') {
                    PercentAssign
                } else {
                    Percent
                }
            }
            '!' => {
                if self.cursor.match_char('=') {
                    NotEqual
                } else {
                    Not
                }
            }
            '=' => {
                if self.cursor.match_char('=') {
                    if self.cursor.match_char('=') {
                        StrictEqual
                    } else {
                        Equal
                    }
                } else {
                    Assign
                }
            }
            '<' => {
                if self.cursor.match_char('<') {
                    if self.cursor.match_char('=') {
                        LShiftAssign
                    } else {
                        LShift
                    }
                } else if self.cursor.match_char('=') {
                    LessEqual
                } else {
                    Less
                }
            }
            '>' => {
                if self.cursor.match_char('>') {
                    if self.cursor.match_char('=') {
                        RShiftAssign
                    } else {
                        RShift
                    }
                } else if self.cursor.match_char('=') {
                    GreaterEqual
                } else {
                    Greater
                }
            }
            '&' => {
                if self.cursor.match_char('&') {
                    And
                } else if self.cursor.match_char('=') {
                    AndAssign
                } else {
                    BitwiseAnd
                }
            }
            '|' => {
                if self.cursor.match_char('|') {
                    Or
                } else if self.cursor.match_char('=') {
                    OrAssign
                } else {
                    BitwiseOr
                }
            }
            _ => {
                return self.latch_error(start, line, column, LexError::UnexpectedCharacter);
            }
        };

        self.make_token(kind, start, line, column, None)
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: usize,
        line: u32,
        column: u32,
        literal: Option<LiteralValue>,
    ) -> Token<'src> {
        Token {
            kind,
            lexeme: self.cursor.slice_from(start),
            position: Position {
                line,
                column,
                filename: self.filename,
            },
            literal,
        }
    }

    fn latch_error(
        &mut self,
        start: usize,
        line: u32,
        column: u32,
        error: LexError,
    ) -> Token<'src> {
        self.has_error = true;
        self.last_error = Some(error);
        self.make_token(TokenKind::Error, start, line, column, None)
    }
}

fn strip_base_prefix(lexeme: &str, base: u32) -> &str {
    match base {
        16 | 2 | 8 => {
            if lexeme.len() >= 2 {
                &lexeme[2..]
            } else {
                lexeme
            }
        }
        _ => lexeme,
    }
}
