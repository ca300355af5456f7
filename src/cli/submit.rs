//! Submit command implementation

use clap::Args;
use rust_decimal::Decimal;

use super::sample_builder;
use crate::config::Config;
use crate::execution::{reset_store, AdmissionEngine, AdmissionError, OrderTicketInput};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Instrument symbol, e.g. BTC-PERP
    #[arg(long)]
    pub symbol: String,

    /// BUY or SELL
    #[arg(long)]
    pub side: String,

    /// Order quantity
    #[arg(long)]
    pub quantity: Decimal,

    /// Limit price
    #[arg(long)]
    pub price: Decimal,
}

impl SubmitArgs {
    /// Ticket as a client would have sent it
    pub fn ticket(&self) -> OrderTicketInput {
        OrderTicketInput {
            symbol: self.symbol.clone(),
            side: self.side.clone(),
            quantity: Some(self.quantity),
            price: Some(self.price),
        }
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let mut store = reset_store(&sample_builder(config))?;
        let engine = AdmissionEngine::new();

        match engine.submit(&self.ticket(), &mut store) {
            Ok(order) => {
                println!("{}", serde_json::to_string_pretty(&order)?);
                Ok(())
            }
            Err(AdmissionError::Validation(e)) => {
                anyhow::bail!("Rejected (fix ticket and resubmit): {e}")
            }
            Err(AdmissionError::Risk(v)) => anyhow::bail!("Rejected by risk: {v}"),
        }
    }
}
