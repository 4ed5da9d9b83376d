//! Verbosity-aware printing.
//!
//! Three kinds of line leave the program. Summaries can be silenced with
//! `--quiet`. Results (a digest, a stats report) are always printed because
//! scripts read them. Errors always go to stderr.
//!
//! # Examples
//!
//! ```
//! use pdfpages::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, true);
//! formatter.info("Merged 3 pages into: tmp/report-2-4.pdf");
//! formatter.detail("Output size", "12.4 KB");
//! formatter.result("9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08");
//! ```

use std::io::IsTerminal;

const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// How much a command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Results and errors only.
    Quiet,
    /// Summaries, results and errors.
    #[default]
    Normal,
    /// Everything, including per-file details.
    Verbose,
}

/// Prints command output at the configured verbosity.
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    verbosity: Verbosity,
    stdout_colored: bool,
    stderr_colored: bool,
}

impl OutputFormatter {
    /// Formatter for the `--quiet` / `--verbose` flags; quiet wins if both are set.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        let verbosity = match (quiet, verbose) {
            (true, _) => Verbosity::Quiet,
            (false, true) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        };
        Self::with_verbosity(verbosity)
    }

    /// Formatter with an explicit verbosity.
    pub fn with_verbosity(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            stdout_colored: use_color(std::io::stdout().is_terminal()),
            stderr_colored: use_color(std::io::stderr().is_terminal()),
        }
    }

    /// Results and errors only.
    pub fn quiet() -> Self {
        Self::with_verbosity(Verbosity::Quiet)
    }

    /// Current verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Print a summary line. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if self.verbosity != Verbosity::Quiet {
            println!("{message}");
        }
    }

    /// Print a command result, undecorated, regardless of verbosity.
    pub fn result(&self, message: &str) {
        println!("{message}");
    }

    /// Print an indented `label: value` line in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbosity == Verbosity::Verbose {
            println!("{}", paint(&format!("  {label}: {value}"), DIM, self.stdout_colored));
        }
    }

    /// Print an error on stderr.
    pub fn error(&self, message: &str) {
        eprintln!("{}", paint(message, RED, self.stderr_colored));
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::with_verbosity(Verbosity::Normal)
    }
}

/// Colour only terminals, and honour `NO_COLOR`.
fn use_color(is_terminal: bool) -> bool {
    is_terminal && std::env::var_os("NO_COLOR").is_none() && std::env::var_os("TERM").is_some()
}

fn paint(message: &str, color: &str, colored: bool) -> String {
    if colored {
        format!("{color}{message}{RESET}")
    } else {
        message.to_string()
    }
}
