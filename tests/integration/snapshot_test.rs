//! Snapshot builder integration tests

use riskdesk::config::Config;
use riskdesk::portfolio::{PortfolioReport, SampleBook, SnapshotBuilder};
use riskdesk::risk::{
    dynamic_position_size, expected_shortfall, historical_var, max_drawdown, RiskControlsUpdate,
};
use rust_decimal_macros::dec;

#[test]
fn test_sample_snapshot_is_consistent_with_metrics_library() {
    let snapshot = SnapshotBuilder::new(SampleBook::default()).build().unwrap();
    let nav = snapshot.metrics.nav;

    let var = historical_var(&snapshot.returns, dec!(0.95)).unwrap() * nav;
    let es = expected_shortfall(&snapshot.returns, dec!(0.95)).unwrap() * nav;

    assert_eq!(snapshot.metrics.var95, var);
    assert_eq!(snapshot.metrics.expected_shortfall, es);
    assert!(snapshot.metrics.expected_shortfall >= snapshot.metrics.var95);
    assert_eq!(snapshot.metrics.max_drawdown, max_drawdown(&snapshot.equity_curve));
}

#[test]
fn test_sample_dynamic_cap() {
    let snapshot = SnapshotBuilder::new(SampleBook::default()).build().unwrap();
    let cap = dynamic_position_size(
        snapshot.metrics.nav,
        &snapshot.limits,
        &snapshot.metrics,
        dec!(62000),
    );
    // 12000 / 62000 * (1 + 0.3589 * 0.19)
    assert_eq!(cap, dec!(0.2067));
}

#[test]
fn test_controls_from_config_reach_snapshot() {
    let config = Config::parse("[controls]\nmax_leverage = 1.25\nper_trade_var = 500\n").unwrap();
    let snapshot = riskdesk::cli::sample_builder(&config).build().unwrap();

    assert_eq!(snapshot.limits.max_leverage, dec!(1.25));
    assert_eq!(snapshot.limits.per_trade_var, dec!(500));
}

#[test]
fn test_operator_update_is_picked_up_by_next_build() {
    let mut builder = SnapshotBuilder::new(SampleBook::default());
    builder
        .source_mut()
        .update_controls(RiskControlsUpdate {
            per_trade_var: Some(dec!(6000)),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(builder.build().unwrap().limits.per_trade_var, dec!(6000));
}

#[test]
fn test_report_serializes_flat() {
    let snapshot = SnapshotBuilder::new(SampleBook::default()).build().unwrap();
    let report = PortfolioReport {
        snapshot,
        generated_at: chrono::Utc::now(),
    };

    let value = serde_json::to_value(&report).unwrap();
    assert!(value.get("metrics").is_some());
    assert!(value.get("limits").is_some());
    assert!(value.get("generated_at").is_some());
    assert_eq!(value["positions"].as_array().unwrap().len(), 3);
}
