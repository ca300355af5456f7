//! Admission and snapshot metrics

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Snapshot 95% VaR in currency units
    Var95,
    /// Snapshot max drawdown fraction
    DrawdownPct,
    /// Snapshot Kelly fraction
    KellyFraction,
    /// Orders held in the ledger
    LedgerSize,
}

/// Admission outcome counters
#[derive(Debug, Clone, Copy)]
pub enum OrderOutcome {
    Accepted,
    /// Malformed ticket
    Invalid,
    /// Structurally valid but breached a risk gate
    RiskRejected,
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: Decimal) {
    let metric_name = match metric {
        GaugeMetric::Var95 => "riskdesk_var95",
        GaugeMetric::DrawdownPct => "riskdesk_max_drawdown_pct",
        GaugeMetric::KellyFraction => "riskdesk_kelly_fraction",
        GaugeMetric::LedgerSize => "riskdesk_ledger_orders",
    };

    let value = value.to_f64().unwrap_or_default();
    ::metrics::gauge!(metric_name).set(value);
}

/// Count an admission decision
pub fn record_order(outcome: OrderOutcome) {
    match outcome {
        OrderOutcome::Accepted => ::metrics::counter!("riskdesk_orders_accepted_total").increment(1),
        OrderOutcome::Invalid => {
            ::metrics::counter!("riskdesk_orders_rejected_total", "kind" => "validation").increment(1)
        }
        OrderOutcome::RiskRejected => {
            ::metrics::counter!("riskdesk_orders_rejected_total", "kind" => "risk").increment(1)
        }
    }
}
