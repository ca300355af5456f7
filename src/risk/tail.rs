//! Historical tail-risk estimators
//!
//! Empirical quantile methods over a return series; no distributional
//! assumption is made. Losses are reported as positive magnitudes.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::MetricsError;

/// Historical Value-at-Risk at the given confidence
///
/// Sorts returns ascending and reads the observation at
/// `floor((1 - confidence) * n)`, falling back to the worst return when the
/// index runs past the end.
pub fn historical_var(returns: &[Decimal], confidence: Decimal) -> Result<Decimal, MetricsError> {
    let sorted = sorted_returns(returns, confidence)?;
    let index = tail_position(confidence, sorted.len()).floor();
    let loss = index
        .to_usize()
        .and_then(|i| sorted.get(i))
        .unwrap_or(&sorted[0]);
    Ok(loss.abs())
}

/// Historical Expected Shortfall at the given confidence
///
/// Mean of the worst `ceil((1 - confidence) * n)` returns, at least one.
pub fn expected_shortfall(
    returns: &[Decimal],
    confidence: Decimal,
) -> Result<Decimal, MetricsError> {
    let sorted = sorted_returns(returns, confidence)?;
    let tail_len = tail_position(confidence, sorted.len())
        .ceil()
        .to_usize()
        .unwrap_or(1)
        .clamp(1, sorted.len());

    let tail = &sorted[..tail_len];
    let sum: Decimal = tail.iter().sum();
    Ok((sum / Decimal::from(tail_len)).abs())
}

fn sorted_returns(returns: &[Decimal], confidence: Decimal) -> Result<Vec<Decimal>, MetricsError> {
    if returns.is_empty() {
        return Err(MetricsError::InvalidArgument(
            "returns must be non-empty".to_string(),
        ));
    }
    if confidence <= Decimal::ZERO || confidence >= Decimal::ONE {
        return Err(MetricsError::InvalidArgument(format!(
            "confidence must be between 0 and 1, got {confidence}"
        )));
    }

    let mut sorted = returns.to_vec();
    sorted.sort();
    Ok(sorted)
}

fn tail_position(confidence: Decimal, len: usize) -> Decimal {
    (Decimal::ONE - confidence) * Decimal::from(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn twenty_returns() -> Vec<Decimal> {
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

    #[test]
    fn test_var_small_series() {
        // n = 4, index = floor(0.2) = 0 -> worst return
        let var = historical_var(&[dec!(0.01), dec!(-0.02), dec!(0.03), dec!(-0.01)], dec!(0.95))
            .unwrap();
        assert_eq!(var, dec!(0.02));
    }

    #[test]
    fn test_var_reads_quantile_index() {
        // n = 20, index = floor(1.0) = 1 -> second worst
        let var = historical_var(&twenty_returns(), dec!(0.95)).unwrap();
        assert_eq!(var, dec!(0.007));
    }

    #[test]
    fn test_var_positive_quantile_is_magnitude() {
        // Every return is a gain; VaR still reports a magnitude
        let var = historical_var(&[dec!(0.02), dec!(0.01), dec!(0.03)], dec!(0.5)).unwrap();
        assert_eq!(var, dec!(0.02));
    }

    #[test]
    fn test_expected_shortfall_tail_mean() {
        // n = 20, tail = ceil(1.0) = 1 -> worst return only
        let es = expected_shortfall(&twenty_returns(), dec!(0.95)).unwrap();
        assert_eq!(es, dec!(0.01));

        // n = 20 at 90%: tail = 2 -> mean(-0.01, -0.007)
        let es = expected_shortfall(&twenty_returns(), dec!(0.90)).unwrap();
        assert_eq!(es, dec!(0.0085));
    }

    #[test]
    fn test_expected_shortfall_rounds_tail_up() {
        // n = 10 at 95%: 0.5 -> ceil = 1
        let returns: Vec<Decimal> = (1..=10).map(|i| Decimal::from(i) / dec!(-100)).collect();
        let es = expected_shortfall(&returns, dec!(0.95)).unwrap();
        assert_eq!(es, dec!(0.10));

        // n = 10 at 75%: 2.5 -> ceil = 3 -> mean(-0.10, -0.09, -0.08)
        let es = expected_shortfall(&returns, dec!(0.75)).unwrap();
        assert_eq!(es, dec!(0.09));
    }

    #[test]
    fn test_expected_shortfall_dominates_var() {
        let returns = twenty_returns();
        for confidence in [dec!(0.75), dec!(0.9), dec!(0.95), dec!(0.99)] {
            let var = historical_var(&returns, confidence).unwrap();
            let es = expected_shortfall(&returns, confidence).unwrap();
            assert!(es >= var, "ES {es} < VaR {var} at {confidence}");
        }
    }

    #[test]
    fn test_empty_returns_rejected() {
        assert!(matches!(
            historical_var(&[], dec!(0.95)),
            Err(MetricsError::InvalidArgument(_))
        ));
        assert!(matches!(
            expected_shortfall(&[], dec!(0.95)),
            Err(MetricsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_confidence_bounds_rejected() {
        let returns = twenty_returns();
        for confidence in [dec!(0), dec!(1), dec!(-0.5), dec!(1.5)] {
            assert!(historical_var(&returns, confidence).is_err());
            assert!(expected_shortfall(&returns, confidence).is_err());
        }
    }

    #[test]
    fn test_input_order_is_preserved() {
        let returns = vec![dec!(0.01), dec!(-0.02)];
        historical_var(&returns, dec!(0.95)).unwrap();
        assert_eq!(returns, vec![dec!(0.01), dec!(-0.02)]);
    }
}
