//! Recursive-descent parser for the source language.
//!
//! Consumes tokens from a [`sol_lex::Lexer`] one at a time with one-token
//! lookahead and builds a [`Program`](ast::Program) AST. Single pass,
//! panic-mode recovery on statement boundaries, no backtracking: the
//! grammar this crate implements is LL(1) by construction.
//!
//! The grammar is a small subset of the full token alphabet `sol-util`
//! defines — variable declarations with the four basic type keywords,
//! `return`, and expression statements, built on an eight-level expression
//! precedence ladder (`expr.rs`). Everything else in the keyword table is
//! still recognized correctly by the lexer; this parser simply has no
//! productions for it yet (see that crate's module docs).

pub mod ast;
pub mod error;
mod expr;
mod parser;
mod stmt;

pub use ast::{Expr, LiteralKind, Program, Stmt};
pub use error::ParseError;
pub use parser::Parser;

#[cfg(test)]
mod tests {
    use sol_lex::Lexer;
    use sol_util::{Arena, TokenKind};

    use super::*;
    use crate::ast::LiteralKind as LK;

    fn parse(source: &'static str) -> (Program<'static>, bool, Option<String>) {
        // A leaked arena keeps the signature simple for tests: the AST must
        // outlive the `Parser`, and tests don't need to free anything. The
        // `'static` source bound is what makes that legal under `Parser`'s
        // `'src: 'ast` requirement — every call site here passes a literal,
        // so this costs nothing in practice.
        let arena: &'static Arena = Box::leak(Box::new(Arena::new()));
        let lexer = Lexer::new(source, "<test>");
        let mut parser = Parser::new(lexer, arena);
        let program = parser.parse();
        (program, parser.has_error(), parser.error_message().map(str::to_string))
    }

    #[test]
    fn empty_source_is_empty_program() {
        let (program, had_error, _) = parse("");
        assert_eq!(program.statements.len(), 0);
        assert!(!had_error);
    }

    #[test]
    fn whitespace_and_comments_only_is_empty_program() {
        let (program, had_error, _) = parse("  // hi\n/* block */  ");
        assert_eq!(program.statements.len(), 0);
        assert!(!had_error);
    }

    #[test]
    fn s1_var_declaration() {
        let (program, had_error, _) = parse("int x = 42;");
        assert!(!had_error);
        assert_eq!(program.statements.len(), 1);
        match program.statements[0] {
            Stmt::VarDeclaration {
                declared_type,
                name,
                initializer: Some(Expr::Literal { kind: LK::Integer(42), .. }),
                ..
            } => {
                assert_eq!(*declared_type, TokenKind::Int);
                assert_eq!(*name, "x");
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn s2_precedence_multiplication_binds_tighter() {
        let (program, had_error, _) = parse("return 1 + 2 * 3;");
        assert!(!had_error);
        assert_eq!(program.statements.len(), 1);
        let Stmt::ReturnStatement { value: Some(Expr::Binary { left, op, right, .. }), .. } =
            program.statements[0]
        else {
            panic!("expected a return statement with a binary value");
        };
        assert_eq!(*op, TokenKind::Plus);
        assert!(matches!(left, Expr::Literal { kind: LK::Integer(1), .. }));
        assert!(matches!(right, Expr::Binary { op: TokenKind::Star, .. }));
    }

    #[test]
    fn s3_assignment_is_right_associative() {
        let (program, had_error, _) = parse("a = b = 1;");
        assert!(!had_error);
        assert_eq!(program.statements.len(), 1);
        let Stmt::ExpressionStatement {
            expr: Expr::Assignment { target, value, .. },
            ..
        } = program.statements[0]
        else {
            panic!("expected an assignment expression statement");
        };
        assert!(matches!(target, Expr::Identifier { name, .. } if *name == "a"));
        assert!(matches!(
            value,
            Expr::Assignment { target: Expr::Identifier { name, .. }, .. } if *name == "b"
        ));
    }

    #[test]
    fn s5_error_recovery_resumes_at_next_statement() {
        let (program, had_error, message) = parse("int x 5;\nint y = 7;");
        assert!(had_error);
        assert!(message.is_some());
        assert_eq!(program.statements.len(), 1);
        match program.statements[0] {
            Stmt::VarDeclaration { name, initializer: Some(Expr::Literal { kind: LK::Integer(7), .. }), .. } => {
                assert_eq!(*name, "y");
            }
            other => panic!("unexpected statement: {other:?}"),
        }
    }

    #[test]
    fn s6_hex_and_binary_literals() {
        let (program, had_error, _) = parse("0xFF + 0b10;");
        assert!(!had_error);
        let Stmt::ExpressionStatement {
            expr: Expr::Binary { left, op, right, .. },
            ..
        } = program.statements[0]
        else {
            panic!("expected a binary expression statement");
        };
        assert_eq!(*op, TokenKind::Plus);
        assert!(matches!(left, Expr::Literal { kind: LK::Integer(255), .. }));
        assert!(matches!(right, Expr::Literal { kind: LK::Integer(2), .. }));
    }

    #[test]
    fn invalid_assignment_target_is_an_error() {
        let (_, had_error, message) = parse("1 = 2;");
        assert!(had_error);
        assert!(message.unwrap().contains("Invalid assignment target"));
    }

    #[test]
    fn missing_semicolon_is_an_error_but_parsing_continues() {
        let (program, had_error, _) = parse("int x = 1\nint y = 2;");
        assert!(had_error);
        // The first declaration fails to find ';', synchronizes, and the
        // second declaration still parses.
        assert_eq!(program.statements.len(), 1);
        assert!(matches!(
            program.statements[0],
            Stmt::VarDeclaration { name, .. } if *name == "y"
        ));
    }

    #[test]
    fn unary_prefix_operators() {
        let (program, had_error, _) = parse("return -x;");
        assert!(!had_error);
        let Stmt::ReturnStatement { value: Some(Expr::Unary { op, operand, .. }), .. } =
            program.statements[0]
        else {
            panic!("expected a unary return value");
        };
        assert_eq!(*op, TokenKind::Minus);
        assert!(matches!(operand, Expr::Identifier { name, .. } if *name == "x"));
    }

    #[test]
    fn parenthesized_expression_does_not_add_a_node() {
        let (program, had_error, _) = parse("return (1 + 2) * 3;");
        assert!(!had_error);
        let Stmt::ReturnStatement { value: Some(Expr::Binary { op, left, .. }), .. } =
            program.statements[0]
        else {
            panic!("expected a binary return value");
        };
        assert_eq!(*op, TokenKind::Star);
        assert!(matches!(left, Expr::Binary { op: TokenKind::Plus, .. }));
    }

    #[test]
    fn boolean_and_null_literals() {
        let (program, had_error, _) = parse("bool a = true;\nbool b = false;\nstring c = null;");
        assert!(!had_error);
        assert_eq!(program.statements.len(), 3);
        assert!(matches!(
            program.statements[0],
            Stmt::VarDeclaration { initializer: Some(Expr::Literal { kind: LK::Bool(true), .. }), .. }
        ));
        assert!(matches!(
            program.statements[1],
            Stmt::VarDeclaration { initializer: Some(Expr::Literal { kind: LK::Bool(false), .. }), .. }
        ));
        assert!(matches!(
            program.statements[2],
            Stmt::VarDeclaration { initializer: Some(Expr::Literal { kind: LK::Null, .. }), .. }
        ));
    }

    #[test]
    fn string_literal_strips_quotes() {
        let (program, had_error, _) = parse(r#"string s = "hi";"#);
        assert!(!had_error);
        assert!(matches!(
            program.statements[0],
            Stmt::VarDeclaration { initializer: Some(Expr::Literal { kind: LK::String("hi"), .. }), .. }
        ));
    }

    #[test]
    fn bare_newlines_between_statements_are_skipped() {
        let (program, had_error, _) = parse("\n\nint x = 1;\n\nint y = 2;\n");
        assert!(!had_error);
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn unterminated_string_surfaces_as_lexical_error() {
        let (program, had_error, message) = parse("string s = \"oops;");
        assert!(had_error);
        assert!(message.unwrap().contains("Lexical error"));
        assert_eq!(program.statements.len(), 0);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as prop_vec;
    use proptest::prelude::*;
    use sol_lex::Lexer;
    use sol_util::Arena;

    use super::*;

    /// Builds a well-formed program out of `n` independent `int IDENT = N;`
    /// declarations with distinct names, so the only way the parser could
    /// fail is a bug rather than a deliberately malformed fixture.
    fn well_formed_declarations(names: &[String], values: &[i64]) -> String {
        names
            .iter()
            .zip(values)
            .map(|(name, value)| format!("int {name} = {value};\n"))
            .collect()
    }

    proptest! {
        // Invariant 5: statement count equals the number of successfully
        // completed top-level declarations, for any well-formed input.
        #[test]
        fn well_formed_declarations_all_parse_without_error(
            names in prop_vec("[a-z][a-z0-9]{0,10}", 1..12),
            values in prop_vec(0i64..1_000_000, 1..12),
        ) {
            let n = names.len().min(values.len());
            let names = &names[..n];
            let values = &values[..n];
            // Distinct, non-keyword names only: a parser that happens to
            // redeclare a name is still syntactically well-formed (this
            // grammar has no scope/duplicate check), so dedup is just to
            // keep the fixture simple to reason about. Excluding keywords
            // is load-bearing, though — the generator's `[a-z][a-z0-9]*`
            // alphabet can produce strings like "if" or "return" that lex
            // to a keyword token, not an `IDENTIFIER`, which would make
            // `int if = 5;` a genuine syntax error unrelated to what this
            // property is checking.
            let mut seen = std::collections::HashSet::new();
            let unique: Vec<_> = names
                .iter()
                .cloned()
                .filter(|n| sol_util::lookup_keyword(n).is_none() && seen.insert(n.clone()))
                .collect();
            let values = &values[..unique.len()];

            let source: String = well_formed_declarations(&unique, values);
            let arena = Arena::new();
            let lexer = Lexer::new(&source, "<proptest>");
            let mut parser = Parser::new(lexer, &arena);
            let program = parser.parse();

            prop_assert!(!parser.has_error());
            prop_assert_eq!(program.statements.len(), unique.len());
            for (stmt, name) in program.statements.iter().zip(unique.iter()) {
                match stmt {
                    Stmt::VarDeclaration { name: parsed_name, position, .. } => {
                        prop_assert_eq!(*parsed_name, name.as_str());
                        // Invariant 4: every node has a valid (1-based) position.
                        prop_assert!(position.line >= 1);
                        prop_assert!(position.column >= 1);
                    }
                    other => prop_assert!(false, "expected a VarDeclaration, got {:?}", other),
                }
            }
        }
    }
}
