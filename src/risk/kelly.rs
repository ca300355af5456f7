//! Kelly criterion

use rust_decimal::Decimal;

use super::types::round_dp;
use super::MetricsError;

/// Kelly fraction for a bet with the given win rate and payoff ratio
///
/// f* = p - (1 - p) / b, floored at zero: a negative edge means "do not
/// size this bet", never a short.
pub fn kelly_fraction(win_rate: Decimal, win_loss_ratio: Decimal) -> Result<Decimal, MetricsError> {
    if win_rate < Decimal::ZERO || win_rate > Decimal::ONE {
        return Err(MetricsError::InvalidArgument(format!(
            "win_rate must be between 0 and 1, got {win_rate}"
        )));
    }
    if win_loss_ratio <= Decimal::ZERO {
        return Err(MetricsError::InvalidArgument(format!(
            "win_loss_ratio must be positive, got {win_loss_ratio}"
        )));
    }

    let raw = win_rate - (Decimal::ONE - win_rate) / win_loss_ratio;
    Ok(round_dp(raw, 4).max(Decimal::ZERO))
}
