//! Flag-based CLI surface, `clap`-derive based like `faxt`'s `Cli`, but
//! flags rather than subcommands: every mode is mutually exclusive and
//! resolved by priority rather than dispatched through a `Subcommand`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Mode;

/// solc - a small compiler front-end for the sol language.
///
/// With no flags, runs the built-in lexer test suite followed by a
/// benchmark pass.
#[derive(Parser, Debug)]
#[command(name = "solc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A small compiler front-end for the sol language", long_about = None)]
pub struct Cli {
    /// Interactive token dump: read lines from stdin, print their tokens.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Benchmark: tokenize the embedded sample repeatedly and report throughput.
    #[arg(short = 'b', long = "benchmark")]
    pub benchmark: bool,

    /// Compile the embedded sample program and print the emitted C-like source.
    #[arg(short = 'c', long = "compile-sample")]
    pub compile_sample: bool,

    /// Compile a file: read it, run the pipeline, print the emitted C-like source.
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true, env = "SOLC_VERBOSE")]
    pub verbose: bool,
}

impl Cli {
    /// Resolves the flags into a single `Mode`, in priority order: a file
    /// to compile wins over the embedded sample, which wins over the
    /// benchmark, which wins over interactive mode. No flags at all falls
    /// back to the built-in test suite.
    pub fn mode(&self) -> Mode {
        if let Some(path) = &self.file {
            Mode::CompileFile(path.clone())
        } else if self.compile_sample {
            Mode::CompileSample
        } else if self.benchmark {
            Mode::Benchmark
        } else if self.interactive {
            Mode::Interactive
        } else {
            Mode::TestSuite
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_resolves_to_test_suite() {
        let cli = Cli::parse_from(["solc"]);
        assert_eq!(cli.mode(), Mode::TestSuite);
    }

    #[test]
    fn interactive_flag() {
        let cli = Cli::parse_from(["solc", "-i"]);
        assert_eq!(cli.mode(), Mode::Interactive);
    }

    #[test]
    fn benchmark_flag() {
        let cli = Cli::parse_from(["solc", "--benchmark"]);
        assert_eq!(cli.mode(), Mode::Benchmark);
    }

    #[test]
    fn compile_sample_flag() {
        let cli = Cli::parse_from(["solc", "-c"]);
        assert_eq!(cli.mode(), Mode::CompileSample);
    }

    #[test]
    fn file_flag() {
        let cli = Cli::parse_from(["solc", "-f", "program.sol"]);
        assert_eq!(cli.mode(), Mode::CompileFile(PathBuf::from("program.sol")));
    }

    #[test]
    fn file_flag_wins_over_every_other_flag() {
        let cli = Cli::parse_from(["solc", "-i", "-b", "-c", "-f", "program.sol"]);
        assert_eq!(cli.mode(), Mode::CompileFile(PathBuf::from("program.sol")));
    }

    #[test]
    fn verbose_flag() {
        let cli = Cli::parse_from(["solc", "-v"]);
        assert!(cli.verbose);
    }
}
