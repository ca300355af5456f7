//! Operator risk controls

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::MetricsError;

/// Operator-configured guardrails consulted by order admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskControls {
    /// Maximum projected leverage after an order (notional / nav)
    pub max_leverage: Decimal,
    /// Drawdown fraction at which all trading halts
    pub max_drawdown: Decimal,
    /// Per-trade Value-at-Risk budget in currency units
    pub per_trade_var: Decimal,
}

impl Default for RiskControls {
    fn default() -> Self {
        Self {
            max_leverage: dec!(3),
            max_drawdown: dec!(0.20),
            per_trade_var: dec!(12000),
        }
    }
}

/// Partial update to [`RiskControls`]; `None` fields are left untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskControlsUpdate {
    pub max_leverage: Option<Decimal>,
    pub max_drawdown: Option<Decimal>,
    pub per_trade_var: Option<Decimal>,
}

impl RiskControls {
    /// Apply a partial update
    ///
    /// The update is checked as a whole; on error the controls are unchanged.
    pub fn apply(&mut self, update: RiskControlsUpdate) -> Result<(), MetricsError> {
        let next = Self {
            max_leverage: update.max_leverage.unwrap_or(self.max_leverage),
            max_drawdown: update.max_drawdown.unwrap_or(self.max_drawdown),
            per_trade_var: update.per_trade_var.unwrap_or(self.per_trade_var),
        };
        next.validate()?;
        *self = next;
        Ok(())
    }

    /// Restore the default guardrails
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check that the controls describe a usable policy
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.max_leverage <= Decimal::ZERO {
            return Err(MetricsError::InvalidArgument(format!(
                "max_leverage must be positive, got {}",
                self.max_leverage
            )));
        }
        if self.max_drawdown <= Decimal::ZERO || self.max_drawdown > Decimal::ONE {
            return Err(MetricsError::InvalidArgument(format!(
                "max_drawdown must be in (0, 1], got {}",
                self.max_drawdown
            )));
        }
        if self.per_trade_var < Decimal::ZERO {
            return Err(MetricsError::InvalidArgument(format!(
                "per_trade_var must be non-negative, got {}",
                self.per_trade_var
            )));
        }
        Ok(())
    }
}
