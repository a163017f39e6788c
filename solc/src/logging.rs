//! Logging setup, mirroring `faxt`'s `init_logging`: an `EnvFilter` gated by
//! the verbose flag, layered onto a plain `fmt` subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, SolcError};

pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("SOLC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| SolcError::Logging(e.to_string()))?;

    Ok(())
}
