//! Risk metric types

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portfolio-level risk figures
///
/// `var95`, `expected_shortfall`, `max_drawdown` and `kelly_fraction` are
/// derived on every snapshot build; `nav`, `leverage` and
/// `available_buying_power` come from the position-keeping source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Net asset value
    pub nav: Decimal,
    /// 95% historical VaR in currency units
    pub var95: Decimal,
    /// 95% expected shortfall in currency units
    pub expected_shortfall: Decimal,
    /// Max drawdown of the equity curve as a fraction
    pub max_drawdown: Decimal,
    /// Current gross leverage
    pub leverage: Decimal,
    /// Kelly fraction under the sizing policy
    pub kelly_fraction: Decimal,
    /// Buying power available for new orders
    pub available_buying_power: Decimal,
}

/// Risk metric errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    /// A precondition on an input argument was violated
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Round half away from zero to `dp` decimal places
pub(crate) fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
