//! Error type for the `solc` driver binary.

use std::path::PathBuf;

use thiserror::Error;

/// Errors the driver itself can raise, as opposed to errors latched inside
/// the lexer/parser (which are reported through their own `has_error`/
/// `error_message` accessors rather than propagated as a `Result`).
#[derive(Debug, Error)]
pub enum SolcError {
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("emission failed: {0}")]
    Emit(#[from] sol_emit::EmitError),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, SolcError>;
