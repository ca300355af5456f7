//! Order admission engine
//!
//! A ticket is validated, sized and gated against the store's current
//! snapshot. Only when every check passes is an order minted and prepended
//! to the ledger; a failed ticket is reported once and never stored.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{
    AdmissionError, Order, OrderId, OrderStatus, OrderStore, OrderTicket, OrderTicketInput,
    RiskViolation,
};
use crate::portfolio::PortfolioSnapshot;
use crate::risk::{dynamic_position_size, round_dp};
use crate::telemetry::{record_order, set_gauge, GaugeMetric, OrderOutcome};

/// Source of timestamps for accepted orders
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of unique order identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// Random v4 UUID identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> OrderId {
        Uuid::new_v4().to_string()
    }
}

/// Validates tickets and appends accepted orders to a ledger
#[derive(Debug, Clone, Default)]
pub struct AdmissionEngine<C = SystemClock, G = UuidGenerator> {
    clock: C,
    ids: G,
}

impl AdmissionEngine {
    /// Engine stamping wall-clock time and UUID identifiers
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock, G: IdGenerator> AdmissionEngine<C, G> {
    /// Engine with explicit clock and id generator
    pub fn with_parts(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    /// Run every admission check without touching a ledger
    pub fn validate(
        &self,
        input: &OrderTicketInput,
        snapshot: &PortfolioSnapshot,
    ) -> Result<OrderTicket, AdmissionError> {
        let ticket = input.validate()?;
        check_risk(&ticket, snapshot)?;
        Ok(ticket)
    }

    /// Admit a ticket, prepending the accepted order to the store's ledger
    pub fn submit(
        &self,
        input: &OrderTicketInput,
        store: &mut OrderStore,
    ) -> Result<Order, AdmissionError> {
        let ticket = match self.validate(input, store.portfolio()) {
            Ok(ticket) => ticket,
            Err(err) => {
                match &err {
                    AdmissionError::Validation(e) => {
                        tracing::warn!(symbol = %input.symbol, error = %e, "Order ticket invalid");
                        record_order(OrderOutcome::Invalid);
                    }
                    AdmissionError::Risk(v) => {
                        tracing::warn!(symbol = %input.symbol, reason = %v, "Order rejected by risk");
                        record_order(OrderOutcome::RiskRejected);
                    }
                }
                return Err(err);
            }
        };

        let order = Order {
            id: self.ids.next_id(),
            symbol: ticket.symbol,
            side: ticket.side,
            quantity: round_dp(ticket.quantity, 4),
            price: round_dp(ticket.price, 2),
            status: OrderStatus::Accepted,
            created_at: self.clock.now(),
        };
        store.prepend(order.clone());

        tracing::info!(
            order_id = %order.id,
            symbol = %order.symbol,
            side = %order.side,
            quantity = %order.quantity,
            price = %order.price,
            "Order accepted"
        );
        record_order(OrderOutcome::Accepted);
        set_gauge(GaugeMetric::LedgerSize, Decimal::from(store.orders().len()));

        Ok(order)
    }
}

/// Apply the risk gates to a structurally valid ticket
///
/// In order: dynamic size cap, projected leverage, drawdown halt. The
/// drawdown halt blocks every order once reached, including ones that would
/// reduce exposure.
pub fn check_risk(ticket: &OrderTicket, snapshot: &PortfolioSnapshot) -> Result<(), RiskViolation> {
    let metrics = &snapshot.metrics;
    let limits = &snapshot.limits;

    let cap = dynamic_position_size(metrics.nav, limits, metrics, ticket.price);
    if ticket.quantity > cap {
        return Err(RiskViolation::QuantityExceedsCap {
            requested: ticket.quantity,
            cap,
        });
    }

    let projected = projected_leverage(metrics.nav, ticket.quantity, ticket.price);
    if projected > limits.max_leverage {
        return Err(RiskViolation::LeverageBreach {
            projected,
            limit: limits.max_leverage,
        });
    }

    if metrics.max_drawdown >= limits.max_drawdown {
        return Err(RiskViolation::DrawdownHalt {
            drawdown: metrics.max_drawdown,
            limit: limits.max_drawdown,
        });
    }

    Ok(())
}

/// (nav + notional) / nav; unbounded when nav is not positive or on overflow
fn projected_leverage(nav: Decimal, quantity: Decimal, price: Decimal) -> Decimal {
    if nav <= Decimal::ZERO {
        return Decimal::MAX;
    }
    quantity
        .checked_mul(price)
        .and_then(|notional| nav.checked_add(notional))
        .and_then(|gross| gross.checked_div(nav))
        .unwrap_or(Decimal::MAX)
}
