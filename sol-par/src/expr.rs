//! The expression grammar: one function per precedence level, lowest to
//! highest, exactly as laid out in the grammar table this crate implements.
//! Deliberately NOT collapsed into a single Pratt/binding-power loop — each
//! level is its own function so a new level (bitwise, shift) can be spliced
//! in without touching its neighbors.

use sol_util::{LiteralValue, TokenKind};

use crate::ast::{Expr, LiteralKind};
use crate::error::ParseError;
use crate::parser::Parser;

impl<'src, 'ast> Parser<'src, 'ast>
where
    'src: 'ast,
{
    /// Level 1: assignment, right-associative. The left-hand side of `=`
    /// must already be an `Identifier`; anything else is a parse error
    /// (`Invalid assignment target`) reported at the point the offending
    /// target was parsed, not at the `=`.
    pub(crate) fn assignment(&mut self) -> Option<&'ast Expr<'ast>> {
        let target = self.logical_or()?;

        if self.current.kind != TokenKind::Assign {
            return Some(target);
        }

        let position = self.current.position;
        if !matches!(target, Expr::Identifier { .. }) {
            self.bump();
            self.error_at_current(ParseError::InvalidAssignmentTarget);
            // Still parse the RHS so panic-mode recovery has the right
            // token to synchronize from, even though the node is discarded.
            let _ = self.assignment();
            return None;
        }

        self.bump();
        let value = self.assignment()?; // right-assoc: recurse at our own level
        self.alloc(Expr::Assignment {
            target,
            value,
            position,
        })
    }

    /// Level 2: `||`, left-associative.
    fn logical_or(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.logical_and()?;
        while self.current.kind == TokenKind::Or {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.logical_and()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 3: `&&`, left-associative.
    fn logical_and(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.equality()?;
        while self.current.kind == TokenKind::And {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.equality()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 4: `==`, `!=`, left-associative.
    fn equality(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.comparison()?;
        while matches!(self.current.kind, TokenKind::Equal | TokenKind::NotEqual) {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.comparison()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 5: `<`, `<=`, `>`, `>=`, left-associative.
    fn comparison(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.term()?;
        while matches!(
            self.current.kind,
            TokenKind::Less | TokenKind::LessEqual | TokenKind::Greater | TokenKind::GreaterEqual
        ) {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.term()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 6: `+`, `-`, left-associative.
    fn term(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.factor()?;
        while matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.factor()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 7: `*`, `/`, `%`, left-associative.
    fn factor(&mut self) -> Option<&'ast Expr<'ast>> {
        let mut expr = self.unary()?;
        while matches!(
            self.current.kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent
        ) {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let right = self.unary()?;
            expr = self.alloc(Expr::Binary {
                left: expr,
                op,
                right,
                position,
            })?;
        }
        Some(expr)
    }

    /// Level 8: prefix `!`, `-`, right-associative.
    fn unary(&mut self) -> Option<&'ast Expr<'ast>> {
        if matches!(self.current.kind, TokenKind::Not | TokenKind::Minus) {
            let op = self.current.kind;
            let position = self.current.position;
            self.bump();
            let operand = self.unary()?;
            return self.alloc(Expr::Unary {
                op,
                operand,
                position,
            });
        }
        self.primary()
    }

    /// Level 9: literals, identifiers, and parenthesized sub-expressions.
    /// A parenthesized expression re-enters at the top of the ladder
    /// (`assignment`) and doesn't get its own node — the emitter
    /// parenthesizes every binary operator anyway, so the grouping is
    /// redundant information once the tree is built.
    fn primary(&mut self) -> Option<&'ast Expr<'ast>> {
        let tok = self.current;
        match tok.kind {
            TokenKind::Integer => {
                self.bump();
                let n = match tok.literal {
                    Some(LiteralValue::Int(n)) => n,
                    _ => 0,
                };
                self.alloc(Expr::Literal {
                    kind: LiteralKind::Integer(n),
                    position: tok.position,
                })
            }
            TokenKind::Float => {
                self.bump();
                let f = match tok.literal {
                    Some(LiteralValue::Float(f)) => f,
                    _ => 0.0,
                };
                self.alloc(Expr::Literal {
                    kind: LiteralKind::Float(f),
                    position: tok.position,
                })
            }
            TokenKind::StringLit => {
                self.bump();
                let body = tok.lexeme.get(1..tok.lexeme.len().saturating_sub(1)).unwrap_or("");
                let value = self.intern(body.as_bytes())?;
                self.alloc(Expr::Literal {
                    kind: LiteralKind::String(value),
                    position: tok.position,
                })
            }
            TokenKind::True => {
                self.bump();
                self.alloc(Expr::Literal {
                    kind: LiteralKind::Bool(true),
                    position: tok.position,
                })
            }
            TokenKind::False => {
                self.bump();
                self.alloc(Expr::Literal {
                    kind: LiteralKind::Bool(false),
                    position: tok.position,
                })
            }
            TokenKind::Null => {
                self.bump();
                self.alloc(Expr::Literal {
                    kind: LiteralKind::Null,
                    position: tok.position,
                })
            }
            TokenKind::Identifier => {
                self.bump();
                let name = self.intern(tok.lexeme.as_bytes())?;
                self.alloc(Expr::Identifier {
                    name,
                    position: tok.position,
                })
            }
            TokenKind::LParen => {
                self.bump();
                let inner = self.assignment()?;
                self.expect(TokenKind::RParen, "')'")?;
                Some(inner)
            }
            _ => {
                self.error_at_current(ParseError::ExpectedExpression);
                None
            }
        }
    }
}
