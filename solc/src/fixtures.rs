//! The no-args built-in test suite: tokenizes a handful of fixed fixture
//! categories and reports a token/error count for each, then runs the
//! benchmark pass. Mirrors the original front-end's default-mode fixture
//! sweep; this driver only exercises the lexer, since the grammar this
//! parser implements is a small subset of the full keyword/operator
//! alphabet these fixtures are designed to cover.

use sol_lex::Lexer;
use sol_util::TokenKind;

use crate::benchmark::run_benchmark;

struct Fixture {
    name: &'static str,
    source: &'static str,
}

const FIXTURES: &[Fixture] = &[
    Fixture { name: "delimiters", source: "( ) { } [ ] ; , . :: -> ? ... #" },
    Fixture {
        name: "operators",
        source: "+ - * / % = == != < <= > >= && || ! & | ^ ~ << >> ++ -- += -= *= /= %= **= &= |= ^= <<= >>= **",
    },
    Fixture { name: "numbers", source: "42 3.14 0xFF 0b1010 0o17 1.5e-10 1. .5" },
    Fixture {
        name: "strings",
        source: r#""hello" "with \n escape" "unicode A""#,
    },
    Fixture {
        name: "keywords",
        source: "int float string bool char void if else while for function var class true false null",
    },
    Fixture { name: "identifiers", source: "foo bar_baz _underscore camelCase42" },
    Fixture {
        name: "a complete small function",
        source: "function add(a, b) { return a + b; }",
    },
    Fixture {
        name: "comments",
        source: "// line comment\n/* block comment */ int x = 1;",
    },
    Fixture {
        name: "advanced number formats",
        source: "0x1F 0b11 0o7 1e10 2.5E-3",
    },
    Fixture {
        name: "string escapes",
        source: r#""tab\tnewline\n quote\" backslash\\""#,
    },
    Fixture {
        name: "deliberate error cases",
        source: "\"unterminated\n/* unterminated block\n@",
    },
];

/// Tokenizes `source` fully. Returns `(token_count, error_count)`, where
/// `token_count` excludes the terminating `EOF`.
fn tokenize_fixture(source: &str) -> (usize, usize) {
    let mut lexer = Lexer::new(source, "<fixture>");
    let mut tokens = 0;
    let mut errors = 0;
    loop {
        let tok = lexer.next_token();
        if tok.kind == TokenKind::Eof {
            break;
        }
        if tok.kind == TokenKind::Error {
            errors += 1;
        }
        tokens += 1;
    }
    (tokens, errors)
}

pub fn run_test_suite() {
    println!("solc built-in test suite");
    println!("=========================");

    for fixture in FIXTURES {
        let (tokens, errors) = tokenize_fixture(fixture.source);
        println!("  {:<28} {:>4} tokens, {:>2} errors", fixture.name, tokens, errors);
    }

    println!();
    run_benchmark();
}
