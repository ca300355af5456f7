//! Dynamic position sizing
//!
//! Caps each order by the smaller of the per-trade VaR budget and 10% of
//! buying power, then scales up by Kelly edge times remaining drawdown
//! headroom. With no edge or no headroom the cap is the flat budget.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::round_dp;
use super::{RiskControls, RiskMetrics};

/// Share of buying power a single order may commit
const BUYING_POWER_SHARE: Decimal = dec!(0.1);

/// Maximum order quantity allowed at `price`
pub fn dynamic_position_size(
    equity: Decimal,
    controls: &RiskControls,
    metrics: &RiskMetrics,
    price: Decimal,
) -> Decimal {
    let risk_budget = controls
        .per_trade_var
        .min(metrics.available_buying_power * BUYING_POWER_SHARE);
    let headroom = (controls.max_drawdown - metrics.max_drawdown).max(Decimal::ZERO);
    let kelly_multiplier = metrics.kelly_fraction * headroom;
    let base_size = risk_budget / price.max(Decimal::ONE);

    let size = round_dp(base_size * (Decimal::ONE + kelly_multiplier), 4);
    tracing::debug!(
        %equity,
        %risk_budget,
        %headroom,
        %kelly_multiplier,
        %size,
        "Dynamic position size"
    );
    size
}
