//! solc - a small compiler front-end for the sol language.
//!
//! Wires the lexer/parser/emitter crates into the CLI surface: a built-in
//! test suite, an interactive token dump, a benchmark, and two ways to run
//! the full compile pipeline (an embedded sample, or a file on disk).

mod benchmark;
mod cli;
mod compile;
mod config;
mod error;
mod fixtures;
mod interactive;
mod logging;
mod samples;

use std::process::ExitCode;

use clap::Parser as _;

use cli::Cli;
use config::{Config, Mode};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::resolve(cli.mode(), cli.verbose);

    if let Err(err) = logging::init_logging(config.verbose) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    run(config)
}

/// Dispatches on the resolved mode and converts any propagated library
/// error into an `anyhow::Error` at this boundary, per `faxt`'s
/// `anyhow`-based `main` and `faxc-drv`'s `CompileError` bubbling — the
/// lexer/parser's own latched errors are already folded into a `SolcError`
/// by `compile::run_pipeline` before they ever reach here.
fn run(config: Config) -> ExitCode {
    let color = config.color;
    match run_inner(&config) {
        Ok(rendered) => {
            if let Some(rendered) = rendered {
                print!("{rendered}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&err, color);
            ExitCode::FAILURE
        }
    }
}

fn run_inner(config: &Config) -> anyhow::Result<Option<String>> {
    match &config.mode {
        Mode::TestSuite => {
            fixtures::run_test_suite();
            Ok(None)
        }
        Mode::Interactive => {
            interactive::run_interactive();
            Ok(None)
        }
        Mode::Benchmark => {
            benchmark::run_benchmark();
            Ok(None)
        }
        Mode::CompileSample => {
            let rendered = compile::run_pipeline(samples::EMBEDDED_SAMPLE, "<sample>")?;
            Ok(Some(rendered))
        }
        Mode::CompileFile(path) => Ok(Some(compile_file(path)?)),
    }
}

/// Prints a driver error to stderr, wrapped in ANSI red when `color` is set
/// (i.e. stderr looks like a terminal — see `Config::resolve`).
fn print_error(err: &anyhow::Error, color: bool) {
    if color {
        eprintln!("\x1b[31merror:\x1b[0m {err}");
    } else {
        eprintln!("error: {err}");
    }
}

fn compile_file(path: &std::path::Path) -> anyhow::Result<String> {
    let source = std::fs::read_to_string(path).map_err(|source| error::SolcError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path.to_string_lossy();
    Ok(compile::run_pipeline(&source, &filename)?)
}
