//! Command line argument parsing for the Orthos CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default word-list location on most Unix systems.
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Orthos - a trie-backed spelling corrector
#[derive(Parser, Debug, Clone)]
#[command(name = "orthos")]
#[command(about = "A trie-backed spelling corrector with bounded edit-distance search")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct OrthosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl OrthosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON, one document per result
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check the spelling of one or more words
    Check(CheckArgs),

    /// Interactively check words read from standard input
    Repl(ReplArgs),

    /// Sample dictionary words, garble them, and check they correct back
    Fuzz(FuzzArgs),
}

/// Arguments for the check command
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Words to check
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Path to the word list (one word per line)
    #[arg(short, long, value_name = "WORDS_FILE", default_value = DEFAULT_WORDS_PATH)]
    pub dictionary: PathBuf,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Path to the word list (one word per line)
    #[arg(short, long, value_name = "WORDS_FILE", default_value = DEFAULT_WORDS_PATH)]
    pub dictionary: PathBuf,
}

/// Arguments for the fuzz command
#[derive(Parser, Debug, Clone)]
pub struct FuzzArgs {
    /// Path to the word list (one word per line)
    #[arg(short, long, value_name = "WORDS_FILE", default_value = DEFAULT_WORDS_PATH)]
    pub dictionary: PathBuf,

    /// Number of random words to exercise
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let args = OrthosArgs::parse_from(["orthos", "check", "word"]);
        assert_eq!(args.verbosity(), 1);

        let args = OrthosArgs::parse_from(["orthos", "-v", "check", "word"]);
        assert_eq!(args.verbosity(), 1);

        let args = OrthosArgs::parse_from(["orthos", "-vv", "check", "word"]);
        assert_eq!(args.verbosity(), 2);

        let args = OrthosArgs::parse_from(["orthos", "-q", "-vv", "check", "word"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_check_args_parse() {
        let args = OrthosArgs::parse_from([
            "orthos",
            "--format",
            "json",
            "check",
            "--dictionary",
            "/tmp/words",
            "collor",
            "aple",
        ]);

        assert_eq!(args.output_format, OutputFormat::Json);
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.words, vec!["collor", "aple"]);
                assert_eq!(check.dictionary, PathBuf::from("/tmp/words"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_fuzz_defaults() {
        let args = OrthosArgs::parse_from(["orthos", "fuzz"]);
        match args.command {
            Command::Fuzz(fuzz) => {
                assert_eq!(fuzz.count, 1);
                assert_eq!(fuzz.dictionary, PathBuf::from(DEFAULT_WORDS_PATH));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
