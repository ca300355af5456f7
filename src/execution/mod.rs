//! Order admission module
//!
//! Ticket validation, risk gating and the order ledger

mod engine;
mod store;
mod ticket;
mod types;

pub use engine::{check_risk, AdmissionEngine, Clock, IdGenerator, SystemClock, UuidGenerator};
pub use store::{reset_store, OrderStore, SharedOrderStore};
pub use ticket::MIN_SYMBOL_LEN;
pub use types::{
    AdmissionError, FieldError, Order, OrderId, OrderStatus, OrderTicket, OrderTicketInput,
    RiskViolation, Side, ValidationError,
};
