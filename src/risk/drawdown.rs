//! Peak-to-trough drawdown

use rust_decimal::Decimal;

use super::types::round_dp;

/// Largest peak-to-trough decline of an equity curve, as a fraction of the peak
///
/// Single left-to-right scan with a running peak. Curves shorter than two
/// points have no drawdown. Points seen while the peak is not positive are
/// skipped since the fraction is undefined there.
pub fn max_drawdown(equity_curve: &[Decimal]) -> Decimal {
    let Some(&first) = equity_curve.first() else {
        return Decimal::ZERO;
    };
    if equity_curve.len() < 2 {
        return Decimal::ZERO;
    }

    let mut peak = first;
    let mut worst = Decimal::ZERO;
    for &point in equity_curve {
        if point > peak {
            peak = point;
        }
        if peak <= Decimal::ZERO {
            continue;
        }
        let drawdown = (peak - point) / peak;
        if drawdown > worst {
            worst = drawdown;
        }
    }

    round_dp(worst, 4)
}
