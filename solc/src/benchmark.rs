//! `-b`: tokenizes the embedded sample program repeatedly and reports
//! throughput.

use std::time::Instant;

use sol_lex::Lexer;
use sol_util::TokenKind;

use crate::samples::EMBEDDED_SAMPLE;

const ITERATIONS: u32 = 50_000;

fn tokenize_once(source: &str) -> usize {
    let mut lexer = Lexer::new(source, "<benchmark>");
    let mut count = 0;
    loop {
        let tok = lexer.next_token();
        count += 1;
        if tok.kind == TokenKind::Eof {
            break;
        }
    }
    count
}

pub fn run_benchmark() {
    println!("benchmark: tokenizing the embedded sample {ITERATIONS} times");

    let started = Instant::now();
    let mut tokens_per_run = 0;
    for _ in 0..ITERATIONS {
        tokens_per_run = tokenize_once(EMBEDDED_SAMPLE);
    }
    let elapsed = started.elapsed();

    let total_tokens = tokens_per_run as u64 * ITERATIONS as u64;
    let seconds = elapsed.as_secs_f64().max(f64::EPSILON);
    let tokens_per_sec = total_tokens as f64 / seconds;

    println!("  {tokens_per_run} tokens/run, {total_tokens} tokens total in {elapsed:?}");
    println!("  throughput: {tokens_per_sec:.0} tokens/sec");
}
