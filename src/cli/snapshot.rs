//! Snapshot command implementation

use clap::Args;

use super::sample_builder;
use crate::config::Config;
use crate::execution::{Clock, SystemClock};
use crate::portfolio::PortfolioReport;

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl SnapshotArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let snapshot = sample_builder(config).build()?;
        let report = PortfolioReport {
            snapshot,
            generated_at: SystemClock.now(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        println!("{json}");
        Ok(())
    }
}
