//! Order admission integration tests

use riskdesk::execution::{
    reset_store, AdmissionEngine, AdmissionError, OrderStatus, OrderTicketInput, RiskViolation,
    Side,
};
use riskdesk::portfolio::{SampleBook, SnapshotBuilder};
use riskdesk::risk::RiskControlsUpdate;
use rust_decimal_macros::dec;

fn builder() -> SnapshotBuilder<SampleBook> {
    SnapshotBuilder::new(SampleBook::default())
}

#[test]
fn test_oversized_ticket_rejected() {
    let mut store = reset_store(&builder()).unwrap();
    let ticket = OrderTicketInput::new("BTC-PERP", Side::Buy, dec!(10000), dec!(100000));

    let err = AdmissionEngine::new().submit(&ticket, &mut store).unwrap_err();
    assert!(matches!(err, AdmissionError::Risk(_)));
    assert!(err.to_string().contains("risk cap"));
    assert!(store.orders().is_empty());
}

#[test]
fn test_small_ticket_accepted_and_recorded_first() {
    let mut store = reset_store(&builder()).unwrap();
    let engine = AdmissionEngine::new();

    let first = engine
        .submit(
            &OrderTicketInput::new("ETH-PERP", Side::Sell, dec!(1), dec!(3180)),
            &mut store,
        )
        .unwrap();
    let order = engine
        .submit(
            &OrderTicketInput::new("BTC-PERP", Side::Buy, dec!(0.1), dec!(62000)),
            &mut store,
        )
        .unwrap();

    assert_eq!(order.status, OrderStatus::Accepted);
    assert_eq!(order.symbol, "BTC-PERP");
    assert_ne!(order.id, first.id);
    assert_eq!(store.orders()[0], order);
    assert_eq!(store.orders()[1], first);
}

#[test]
fn test_ticket_from_json() {
    let mut store = reset_store(&builder()).unwrap();
    let ticket: OrderTicketInput = serde_json::from_str(
        r#"{"symbol":"BTC-PERP","side":"BUY","quantity":0.1,"price":62000}"#,
    )
    .unwrap();

    let order = AdmissionEngine::new().submit(&ticket, &mut store).unwrap();
    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["status"], "ACCEPTED");
    assert_eq!(json["side"], "BUY");
}

#[test]
fn test_malformed_json_ticket_reports_fields() {
    let mut store = reset_store(&builder()).unwrap();
    let ticket: OrderTicketInput =
        serde_json::from_str(r#"{"symbol":"X","side":"HOLD","quantity":0}"#).unwrap();

    match AdmissionEngine::new().submit(&ticket, &mut store) {
        Err(AdmissionError::Validation(e)) => {
            assert!(e.has_field("symbol"));
            assert!(e.has_field("side"));
            assert!(e.has_field("quantity"));
            assert!(e.has_field("price"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_halt_once_drawdown_limit_reached() {
    // Sample drawdown is 1%; lowering the limit to it trips the breaker
    let mut builder = builder();
    builder
        .source_mut()
        .update_controls(RiskControlsUpdate {
            max_drawdown: Some(dec!(0.01)),
            ..Default::default()
        })
        .unwrap();
    let mut store = reset_store(&builder).unwrap();
    let engine = AdmissionEngine::new();

    for (symbol, side, quantity, price) in [
        ("BTC-PERP", Side::Buy, dec!(0.01), dec!(62000)),
        ("BTC-PERP", Side::Sell, dec!(0.01), dec!(62000)),
        ("SOL-PERP", Side::Sell, dec!(5), dec!(152.1)),
        ("ETH-PERP", Side::Buy, dec!(10000), dec!(100000)),
    ] {
        let err = engine
            .submit(&OrderTicketInput::new(symbol, side, quantity, price), &mut store)
            .unwrap_err();
        assert!(matches!(err, AdmissionError::Risk(_)));
    }

    let err = engine
        .submit(
            &OrderTicketInput::new("BTC-PERP", Side::Sell, dec!(0.01), dec!(62000)),
            &mut store,
        )
        .unwrap_err();
    assert!(matches!(
        err,
        AdmissionError::Risk(RiskViolation::DrawdownHalt { .. })
    ));
    assert!(store.orders().is_empty());
}

#[test]
fn test_reset_store_clears_ledger() {
    let builder = builder();
    let mut store = reset_store(&builder).unwrap();
    AdmissionEngine::new()
        .submit(
            &OrderTicketInput::new("BTC-PERP", Side::Buy, dec!(0.1), dec!(62000)),
            &mut store,
        )
        .unwrap();
    assert_eq!(store.orders().len(), 1);

    let store = reset_store(&builder).unwrap();
    assert!(store.orders().is_empty());
    assert_eq!(store.portfolio(), &builder.build().unwrap());
}
