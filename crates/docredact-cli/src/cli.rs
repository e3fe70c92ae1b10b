use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docredact")]
#[command(about = "Redact PII from documents and mark them confidential", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "DOCREDACT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Redact a document, stamp the confidential header and enable change tracking
    Redact {
        /// Document to redact (.txt, .md or .json snapshot)
        input: PathBuf,

        /// Where to write the result (default: overwrite input)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        overrides: RunOverrides,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Count what a redaction would replace, without changing anything
    Scan {
        /// Document to scan
        input: PathBuf,

        /// Print the redacted text
        #[arg(long)]
        show: bool,

        #[command(flatten)]
        matching: MatchOverrides,
    },

    /// List the active patterns in processing order
    Patterns,

    /// Show the ready banner (toolbar command)
    Notify,

    /// Write the default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct RunOverrides {
    #[command(flatten)]
    pub matching: MatchOverrides,

    /// Skip the confidential header
    #[arg(long)]
    pub no_header: bool,

    /// Leave change tracking alone
    #[arg(long)]
    pub no_tracking: bool,
}

/// Flags shared by `redact` and `scan` so both match the same text
#[derive(Args, Debug, Default)]
pub struct MatchOverrides {
    /// Replacement text for every match
    #[arg(long)]
    pub marker: Option<String>,

    /// Case-sensitive matching
    #[arg(long)]
    pub match_case: bool,

    /// Only match whole words
    #[arg(long)]
    pub whole_word: bool,
}
