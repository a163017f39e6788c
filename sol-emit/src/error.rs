//! Error type for code emission.

use thiserror::Error;

/// Error type for AST-to-text emission.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The requested `OutputFormat` has no renderer yet.
    #[error("target '{0:?}' is not implemented")]
    UnsupportedTarget(crate::OutputFormat),

    /// The emitter was handed a node kind its renderer has no case for.
    /// Only reachable if the parser starts producing node kinds the
    /// emitter hasn't been taught yet (function/class/if/while/for/block).
    #[error("no renderer for node kind: {0}")]
    UnsupportedNode(&'static str),
}

/// Result type alias for emitter operations.
pub type Result<T> = std::result::Result<T, EmitError>;
