//! Risk metrics library
//!
//! Pure functions over return series and equity curves: historical VaR,
//! expected shortfall, max drawdown, Kelly fraction and dynamic position
//! sizing, plus the operator controls they are checked against.

mod drawdown;
mod kelly;
mod limits;
mod sizing;
mod tail;
mod types;

pub use drawdown::max_drawdown;
pub use kelly::kelly_fraction;
pub use limits::{RiskControls, RiskControlsUpdate};
pub use sizing::dynamic_position_size;
pub use tail::{expected_shortfall, historical_var};
pub use types::{MetricsError, RiskMetrics};

pub(crate) use types::round_dp;
