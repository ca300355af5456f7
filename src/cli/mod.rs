//! CLI interface for riskdesk
//!
//! Provides subcommands for:
//! - `snapshot`: Print the current portfolio snapshot with derived risk metrics
//! - `submit`: Run one order ticket through admission
//! - `limits`: Show the effective risk controls
//! - `config`: Show configuration

mod snapshot;
mod submit;

pub use snapshot::SnapshotArgs;
pub use submit::SubmitArgs;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::portfolio::{SampleBook, SnapshotBuilder};

#[derive(Parser, Debug)]
#[command(name = "riskdesk")]
#[command(about = "Order-admission risk engine over a demo portfolio")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the portfolio snapshot as JSON
    Snapshot(SnapshotArgs),
    /// Submit an order ticket against a fresh ledger
    Submit(SubmitArgs),
    /// Show effective risk controls
    Limits,
    /// Show configuration
    Config,
}

/// Snapshot builder over the demo book with configured controls and policy
pub fn sample_builder(config: &Config) -> SnapshotBuilder<SampleBook> {
    SnapshotBuilder::with_policy(SampleBook::new(config.controls), config.snapshot)
}
