//! Command line argument parsing for the lexisent CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::types::Topic;

/// lexisent - lexicon-driven sentiment, score and topic analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "lexisent")]
#[command(about = "Lexicon-driven sentiment, score and topic analysis for customer reviews")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisentArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
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

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "LEXISENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Custom lexicon file (JSON) replacing the built-in word lists
    #[arg(long, value_name = "LEXICON_FILE", env = "LEXISENT_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisentArgs {
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

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a single text
    Analyze(AnalyzeArgs),

    /// Analyze every line of a JSONL or plain text file and summarize
    Batch(BatchArgs),

    /// Inspect the active lexicon
    Lexicon(LexiconArgs),
}

/// Arguments for analyzing one text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (read from --file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Include match counts and score modifiers
    #[arg(long)]
    pub explain: bool,

    /// Skip the length policy check
    #[arg(long)]
    pub no_validate: bool,
}

/// Arguments for batch analysis
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file, one review per line ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Only print the aggregate statistics
    #[arg(long)]
    pub stats_only: bool,

    /// Number of worker threads (default: one per CPU)
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl BatchArgs {
    /// Whether input comes from stdin
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == "-"
    }
}

/// Arguments for lexicon inspection
#[derive(Parser, Debug, Clone)]
pub struct LexiconArgs {
    /// Only list the keywords of this topic
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<Topic>,

    /// Print every table in the lexicon file format
    #[arg(long, conflicts_with = "topic")]
    pub dump: bool,

    /// List every word with its category, one per row
    #[arg(long, conflicts_with_all = ["topic", "dump"])]
    pub entries: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}
