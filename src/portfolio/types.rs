//! Portfolio snapshot types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::risk::{RiskControls, RiskMetrics};

/// An open position marked to market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub quantity: Decimal,
    pub average_price: Decimal,
    pub mark_price: Decimal,
    pub unrealized_pnl: Decimal,
    /// Marked notional value
    pub value: Decimal,
}

/// Notional exposure to an asset class against its limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposureBucket {
    pub asset_class: String,
    pub notional: Decimal,
    pub limit: Decimal,
}

/// Metrics carried unchanged from the position-keeping source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseMetrics {
    pub nav: Decimal,
    pub leverage: Decimal,
    pub available_buying_power: Decimal,
}

/// Raw portfolio state before risk metrics are derived
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSnapshot {
    pub metrics: BaseMetrics,
    pub positions: Vec<Position>,
    pub exposures: Vec<ExposureBucket>,
    pub equity_curve: Vec<Decimal>,
    pub returns: Vec<Decimal>,
    pub limits: RiskControls,
}

/// Immutable view of the portfolio with freshly derived risk metrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub metrics: RiskMetrics,
    pub positions: Vec<Position>,
    pub exposures: Vec<ExposureBucket>,
    pub equity_curve: Vec<Decimal>,
    pub returns: Vec<Decimal>,
    pub limits: RiskControls,
}

/// A snapshot stamped with its generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioReport {
    #[serde(flatten)]
    pub snapshot: PortfolioSnapshot,
    pub generated_at: DateTime<Utc>,
}
