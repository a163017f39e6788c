//! The shared lexer → parser → emitter pipeline used by `-c` and `-f`.

use sol_emit::OutputFormat;
use sol_lex::Lexer;
use sol_par::Parser;
use sol_util::Arena;

use crate::error::Result;

/// Runs the full pipeline over `source` and returns the rendered C-like
/// text. Lexical/syntactic errors are printed as warnings but do not stop
/// emission: the parser always returns a complete (if partial) `Program`,
/// and the emitter renders whatever statements it was handed.
pub fn run_pipeline(source: &str, filename: &str) -> Result<String> {
    let arena = Arena::new();
    let lexer = Lexer::new(source, filename);
    let mut parser = Parser::new(lexer, &arena);
    let program = parser.parse();

    if parser.has_error() {
        if let Some(detail) = parser.error_message() {
            tracing::warn!(%detail, "parse completed with errors");
        }
    }

    sol_emit::emit(&program, OutputFormat::CLike).map_err(Into::into)
}
