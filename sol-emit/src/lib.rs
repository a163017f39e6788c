//! Renders a finished [`sol_par::Program`] AST as textual target code.
//!
//! Only the C-like target is implemented; the other three tags are declared
//! to reserve the design space (mirroring how `sol-par`'s AST reserves node
//! kinds it doesn't construct yet) and return [`error::EmitError::UnsupportedTarget`].

mod c_like;
pub mod error;

use sol_par::Program;

pub use error::{EmitError, Result};

/// The target language tag accepted by [`emit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    CLike,
    JsLike,
    PythonLike,
    Bytecode,
}

/// Renders `program` for `format`. Only [`OutputFormat::CLike`] succeeds
/// today; the rest return a structured [`EmitError::UnsupportedTarget`]
/// naming the requested tag, rather than panicking or silently falling
/// back to the C-like renderer.
pub fn emit(program: &Program<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::CLike => c_like::emit_c_like(program),
        other => {
            tracing::debug!(requested_format = ?other, "emit target not implemented");
            Err(EmitError::UnsupportedTarget(other))
        }
    }
}

#[cfg(test)]
mod tests {
    use sol_lex::Lexer;
    use sol_par::Parser;
    use sol_util::Arena;

    use super::*;

    #[test]
    fn unimplemented_targets_fail_with_unsupported_target() {
        let arena = Arena::new();
        let lexer = Lexer::new("int x = 1;", "<test>");
        let mut parser = Parser::new(lexer, &arena);
        let program = parser.parse();

        for format in [OutputFormat::JsLike, OutputFormat::PythonLike, OutputFormat::Bytecode] {
            match emit(&program, format) {
                Err(EmitError::UnsupportedTarget(got)) => assert_eq!(got, format),
                other => panic!("expected UnsupportedTarget, got {other:?}"),
            }
        }
    }

    #[test]
    fn c_like_target_succeeds() {
        let arena = Arena::new();
        let lexer = Lexer::new("int x = 1;", "<test>");
        let mut parser = Parser::new(lexer, &arena);
        let program = parser.parse();

        let rendered = emit(&program, OutputFormat::CLike).expect("c-like should succeed");
        assert!(rendered.contains("int main()"));
    }
}
