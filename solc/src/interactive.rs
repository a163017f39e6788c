//! `-i`: reads lines from stdin, tokenizes each, and prints the non-trivial
//! tokens (skipping `NEWLINE`/`EOF`, which carry no information in a
//! one-line-at-a-time dump).

use std::io::{self, BufRead};

use sol_lex::Lexer;
use sol_util::TokenKind;

pub fn run_interactive() {
    println!("solc interactive token dump (Ctrl-D to quit)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        let mut lexer = Lexer::new(&line, "<stdin>");
        loop {
            let tok = lexer.next_token();
            if matches!(tok.kind, TokenKind::Newline | TokenKind::Eof) {
                break;
            }
            match tok.literal {
                Some(literal) => println!("  {:?} {:?} {:?}", tok.kind, tok.lexeme, literal),
                None => println!("  {:?} {:?}", tok.kind, tok.lexeme),
            }
        }
    }
}
