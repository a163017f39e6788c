//! Resolved driver configuration, modeled on `faxc-drv::Config`: a plain
//! data struct the CLI layer builds once and hands down to whichever mode
//! runs, rather than threading individual flags through every function.

use std::path::PathBuf;

/// Which of the driver's operating modes to run. Resolved from the CLI
/// flags by priority (`-f` beats `-c` beats `-b` beats `-i`), with no flags
/// at all falling back to the built-in test suite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    TestSuite,
    Interactive,
    Benchmark,
    CompileSample,
    CompileFile(PathBuf),
}

/// Driver options resolved from CLI flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub mode: Mode,
    pub verbose: bool,
    /// Whether diagnostic output may use ANSI color. Not exposed as its own
    /// flag; derived from whether stderr looks like a terminal.
    pub color: bool,
}

impl Config {
    pub fn resolve(mode: Mode, verbose: bool) -> Self {
        let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
        Self { mode, verbose, color }
    }
}
