//! Snapshot builder

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use super::{PortfolioSnapshot, PortfolioSource};
use crate::risk::{
    expected_shortfall, historical_var, kelly_fraction, max_drawdown, round_dp, MetricsError,
    RiskMetrics,
};
use crate::telemetry::{set_gauge, GaugeMetric};

/// Policy constants used when deriving snapshot metrics
///
/// The Kelly inputs are assumed rather than measured from trade history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SnapshotPolicy {
    /// Confidence for VaR and expected shortfall
    pub confidence: Decimal,
    /// Assumed probability of a winning trade
    pub win_rate: Decimal,
    /// Assumed average win / average loss
    pub win_loss_ratio: Decimal,
}

impl Default for SnapshotPolicy {
    fn default() -> Self {
        Self {
            confidence: dec!(0.95),
            win_rate: dec!(0.58),
            win_loss_ratio: dec!(1.9),
        }
    }
}

/// Builds fresh [`PortfolioSnapshot`]s from a base portfolio source
pub struct SnapshotBuilder<S> {
    source: S,
    policy: SnapshotPolicy,
}

impl<S: PortfolioSource> SnapshotBuilder<S> {
    /// Create a builder with the default policy
    pub fn new(source: S) -> Self {
        Self::with_policy(source, SnapshotPolicy::default())
    }

    /// Create a builder with an explicit policy
    pub fn with_policy(source: S, policy: SnapshotPolicy) -> Self {
        Self { source, policy }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn policy(&self) -> &SnapshotPolicy {
        &self.policy
    }

    /// Pull the base snapshot and derive risk metrics from it
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn build(&self) -> Result<PortfolioSnapshot, MetricsError> {
        let base = self.source.base_snapshot();
        let nav = base.metrics.nav;

        let var95 = historical_var(&base.returns, self.policy.confidence)? * nav;
        let shortfall = expected_shortfall(&base.returns, self.policy.confidence)? * nav;
        let drawdown = max_drawdown(&base.equity_curve);
        let kelly = kelly_fraction(self.policy.win_rate, self.policy.win_loss_ratio)?;

        let metrics = RiskMetrics {
            nav,
            var95: round_dp(var95, 2),
            expected_shortfall: round_dp(shortfall, 2),
            max_drawdown: drawdown,
            leverage: base.metrics.leverage,
            kelly_fraction: kelly,
            available_buying_power: base.metrics.available_buying_power,
        };

        tracing::debug!(
            var95 = %metrics.var95,
            expected_shortfall = %metrics.expected_shortfall,
            max_drawdown = %metrics.max_drawdown,
            kelly_fraction = %metrics.kelly_fraction,
            "Portfolio snapshot built"
        );
        set_gauge(GaugeMetric::Var95, metrics.var95);
        set_gauge(GaugeMetric::DrawdownPct, metrics.max_drawdown);
        set_gauge(GaugeMetric::KellyFraction, metrics.kelly_fraction);

        Ok(PortfolioSnapshot {
            metrics,
            positions: base.positions,
            exposures: base.exposures,
            equity_curve: base.equity_curve,
            returns: base.returns,
            limits: base.limits,
        })
    }
}
