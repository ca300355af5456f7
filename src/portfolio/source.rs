//! Base portfolio sources

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{BaseMetrics, BaseSnapshot, ExposureBucket, Position};
use crate::risk::{round_dp, MetricsError, RiskControls, RiskControlsUpdate};

/// Supplies positions, exposures, history and limits for snapshot builds
pub trait PortfolioSource: Send + Sync {
    /// Current base state of the book
    fn base_snapshot(&self) -> BaseSnapshot;
}

/// Deterministic demo book
///
/// Three perpetual positions, four exposure buckets and twenty daily
/// returns compounded from 1,000,000 into the equity curve.
#[derive(Debug, Clone)]
pub struct SampleBook {
    controls: RiskControls,
}

impl SampleBook {
    /// Create a sample book with the given operator controls
    pub fn new(controls: RiskControls) -> Self {
        Self { controls }
    }

    /// Current operator controls
    pub fn controls(&self) -> &RiskControls {
        &self.controls
    }

    /// Apply a partial operator update to the controls
    pub fn update_controls(&mut self, update: RiskControlsUpdate) -> Result<(), MetricsError> {
        self.controls.apply(update)?;
        tracing::info!(controls = ?self.controls, "Risk controls updated");
        Ok(())
    }

    /// Restore default operator controls
    pub fn reset_controls(&mut self) {
        self.controls.reset();
    }

    /// Daily return history of the book
    pub fn returns() -> Vec<Decimal> {
        vec![
            dec!(0.012),
            dec!(-0.006),
            dec!(0.008),
            dec!(0.004),
            dec!(-0.01),
            dec!(0.005),
            dec!(0.011),
            dec!(-0.002),
            dec!(0.009),
            dec!(0.007),
            dec!(-0.004),
            dec!(0.006),
            dec!(0.005),
            dec!(-0.003),
            dec!(0.008),
            dec!(0.01),
            dec!(-0.007),
            dec!(0.004),
            dec!(0.006),
            dec!(-0.002),
        ]
    }

    /// Compound `start` by each return, rounding every point to whole units
    pub fn compound(start: Decimal, returns: &[Decimal]) -> Vec<Decimal> {
        let mut curve = Vec::with_capacity(returns.len() + 1);
        curve.push(start);
        let mut last = start;
        for r in returns {
            last = round_dp(last * (Decimal::ONE + *r), 0);
            curve.push(last);
        }
        curve
    }

    fn positions() -> Vec<Position> {
        vec![
            Position {
                symbol: "BTC-PERP".to_string(),
                quantity: dec!(1.5),
                average_price: dec!(61240),
                mark_price: dec!(62120),
                unrealized_pnl: dec!(1320),
                value: dec!(93180),
            },
            Position {
                symbol: "ETH-PERP".to_string(),
                quantity: dec!(10),
                average_price: dec!(3120),
                mark_price: dec!(3180),
                unrealized_pnl: dec!(600),
                value: dec!(31800),
            },
            Position {
                symbol: "SOL-PERP".to_string(),
                quantity: dec!(400),
                average_price: dec!(148.4),
                mark_price: dec!(152.1),
                unrealized_pnl: dec!(1480),
                value: dec!(60840),
            },
        ]
    }

    fn exposures() -> Vec<ExposureBucket> {
        [
            ("Layer1", dec!(110000), dec!(150000)),
            ("DeFi", dec!(42000), dec!(80000)),
            ("AI", dec!(28000), dec!(60000)),
            ("PerpBasis", dec!(65000), dec!(100000)),
        ]
        .into_iter()
        .map(|(asset_class, notional, limit)| ExposureBucket {
            asset_class: asset_class.to_string(),
            notional,
            limit,
        })
        .collect()
    }
}

impl Default for SampleBook {
    fn default() -> Self {
        Self::new(RiskControls::default())
    }
}

impl PortfolioSource for SampleBook {
    fn base_snapshot(&self) -> BaseSnapshot {
        let returns = Self::returns();
        BaseSnapshot {
            metrics: BaseMetrics {
                nav: dec!(1250000),
                leverage: dec!(2.4),
                available_buying_power: dec!(520000),
            },
            positions: Self::positions(),
            exposures: Self::exposures(),
            equity_curve: Self::compound(dec!(1000000), &returns),
            returns,
            limits: self.controls,
        }
    }
}
