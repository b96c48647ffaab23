//! CLI command definitions and handlers.

pub mod analyze;

use clap::{Parser, Subcommand};

/// Face Insight - emotion and face-condition analysis for detection records
#[derive(Parser)]
#[command(name = "face-insight")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared analyze arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub analyze: analyze::AnalyzeArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze detection records for emotion and face condition
    Analyze(analyze::AnalyzeArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All analyzed faces in acceptable condition.
    Success,
    /// At least one face's overall condition needs attention.
    NeedsAttention,
    /// The run failed.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::NeedsAttention => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
