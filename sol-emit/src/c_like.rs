//! The C-like renderer: the only `OutputFormat` this crate actually emits.
//! Visitor-by-pattern-match, no trait objects — the AST is a closed tagged
//! union, so a `match` is the whole visitor.

use sol_par::{Expr, LiteralKind, Program, Stmt};
use sol_util::TokenKind;

use crate::error::{EmitError, Result};

const PROLOGUE: &str = "#include <stdio.h>\n#include <stdlib.h>\n#include <string.h>\n#include <stdbool.h>\n";

pub fn emit_c_like(program: &Program<'_>) -> Result<String> {
    let mut out = String::new();
    out.push_str(PROLOGUE);
    out.push_str("\nint main() {\n");
    for stmt in program.statements {
        render_stmt(stmt, &mut out)?;
    }
    out.push_str("    return 0;\n}\n");
    Ok(out)
}

fn render_stmt(stmt: &Stmt<'_>, out: &mut String) -> Result<()> {
    match stmt {
        Stmt::VarDeclaration { declared_type, name, initializer, .. } => {
            let c_type = map_type(*declared_type)?;
            match initializer {
                Some(expr) => {
                    out.push_str(&format!("    {c_type} {name} = "));
                    render_expr(expr, out)?;
                    out.push_str(";\n");
                }
                None => out.push_str(&format!("    {c_type} {name};\n")),
            }
            Ok(())
        }
        Stmt::ExpressionStatement { expr, .. } => {
            out.push_str("    ");
            render_expr(expr, out)?;
            out.push_str(";\n");
            Ok(())
        }
        Stmt::ReturnStatement { value, .. } => {
            match value {
                Some(expr) => {
                    out.push_str("    return ");
                    render_expr(expr, out)?;
                    out.push_str(";\n");
                }
                None => out.push_str("    return;\n"),
            }
            Ok(())
        }
        Stmt::Function { .. } => Err(EmitError::UnsupportedNode("Function")),
        Stmt::Class { .. } => Err(EmitError::UnsupportedNode("Class")),
        Stmt::If { .. } => Err(EmitError::UnsupportedNode("If")),
        Stmt::While { .. } => Err(EmitError::UnsupportedNode("While")),
        Stmt::For { .. } => Err(EmitError::UnsupportedNode("For")),
        Stmt::Block { .. } => Err(EmitError::UnsupportedNode("Block")),
    }
}

fn render_expr(expr: &Expr<'_>, out: &mut String) -> Result<()> {
    match expr {
        Expr::Literal { kind, .. } => {
            render_literal(kind, out);
            Ok(())
        }
        Expr::Identifier { name, .. } => {
            out.push_str(name);
            Ok(())
        }
        Expr::Binary { left, op, right, .. } => {
            out.push('(');
            render_expr(left, out)?;
            out.push(' ');
            out.push_str(binary_op_symbol(*op)?);
            out.push(' ');
            render_expr(right, out)?;
            out.push(')');
            Ok(())
        }
        Expr::Unary { op, operand, .. } => {
            out.push('(');
            out.push_str(unary_op_symbol(*op)?);
            render_expr(operand, out)?;
            out.push(')');
            Ok(())
        }
        Expr::Assignment { target, value, .. } => {
            out.push('(');
            render_expr(target, out)?;
            out.push_str(" = ");
            render_expr(value, out)?;
            out.push(')');
            Ok(())
        }
        Expr::Call { .. } => Err(EmitError::UnsupportedNode("Call")),
    }
}

fn render_literal(kind: &LiteralKind<'_>, out: &mut String) {
    match kind {
        LiteralKind::Integer(n) => out.push_str(&n.to_string()),
        LiteralKind::Float(f) => out.push_str(&format!("{f:?}")),
        LiteralKind::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        LiteralKind::Bool(true) => out.push_str("true"),
        LiteralKind::Bool(false) => out.push_str("false"),
        LiteralKind::Null => out.push_str("NULL"),
    }
}

fn map_type(kind: TokenKind) -> Result<&'static str> {
    match kind {
        TokenKind::Int => Ok("int"),
        TokenKind::FloatKw => Ok("double"),
        TokenKind::StringKw => Ok("char*"),
        TokenKind::BoolKw => Ok("bool"),
        _ => Err(EmitError::UnsupportedNode("declared_type")),
    }
}

fn binary_op_symbol(op: TokenKind) -> Result<&'static str> {
    match op {
        TokenKind::Or => Ok("||"),
        TokenKind::And => Ok("&&"),
        TokenKind::Equal => Ok("=="),
        TokenKind::NotEqual => Ok("!="),
        TokenKind::Less => Ok("<"),
        TokenKind::LessEqual => Ok("<="),
        TokenKind::Greater => Ok(">"),
        TokenKind::GreaterEqual => Ok(">="),
        TokenKind::Plus => Ok("+"),
        TokenKind::Minus => Ok("-"),
        TokenKind::Star => Ok("*"),
        TokenKind::Slash => Ok("/"),
        TokenKind::Percent => Ok("%"),
        _ => Err(EmitError::UnsupportedNode("binary operator")),
    }
}

fn unary_op_symbol(op: TokenKind) -> Result<&'static str> {
    match op {
        TokenKind::Not => Ok("!"),
        TokenKind::Minus => Ok("-"),
        _ => Err(EmitError::UnsupportedNode("unary operator")),
    }
}

#[cfg(test)]
mod tests {
    use sol_lex::Lexer;
    use sol_par::Parser;
    use sol_util::Arena;

    use super::*;

    fn emit_source(source: &str) -> String {
        let arena = Arena::new();
        let lexer = Lexer::new(source, "<test>");
        let mut parser = Parser::new(lexer, &arena);
        let program = parser.parse();
        assert!(!parser.has_error(), "unexpected parse error: {:?}", parser.error_message());
        emit_c_like(&program).expect("c-like emission should succeed")
    }

    #[test]
    fn wraps_statements_in_main() {
        let c = emit_source("int x = 1;");
        assert!(c.starts_with(PROLOGUE));
        assert!(c.contains("int main() {\n"));
        assert!(c.contains("    int x = 1;\n"));
        assert!(c.trim_end().ends_with('}'));
        assert!(c.contains("    return 0;\n"));
    }

    #[test]
    fn maps_declared_types() {
        let c = emit_source("float f = 1.5;\nstring s = \"hi\";\nbool b = true;\n");
        assert!(c.contains("double f = 1.5;"));
        assert!(c.contains("char* s = \"hi\";"));
        assert!(c.contains("bool b = true;"));
    }

    #[test]
    fn fully_parenthesizes_binary_expressions() {
        let c = emit_source("return 1 + 2 * 3;");
        assert!(c.contains("return (1 + (2 * 3));"));
    }

    #[test]
    fn renders_unary_and_assignment() {
        let c = emit_source("x = -y;");
        assert!(c.contains("(x = (-y));"));
    }

    #[test]
    fn renders_null_as_upper_case_null() {
        let c = emit_source("string s = null;");
        assert!(c.contains("char* s = NULL;"));
    }
}
