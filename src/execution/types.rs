//! Execution types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Order identifier, opaque and unique within the process
pub type OrderId = String;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(format!("must be BUY or SELL, got {other:?}")),
        }
    }
}

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Accepted,
    Rejected,
    Working,
    Filled,
    Cancelled,
}

/// An order ticket as submitted by a client, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTicketInput {
    pub symbol: String,
    pub side: String,
    pub quantity: Option<Decimal>,
    pub price: Option<Decimal>,
}

impl OrderTicketInput {
    /// Convenience constructor for a fully populated ticket
    pub fn new(symbol: impl Into<String>, side: Side, quantity: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side: side.to_string(),
            quantity: Some(quantity),
            price: Some(price),
        }
    }
}

/// A structurally valid order ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub price: Decimal,
}

/// An accepted order recorded in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: String,
    pub side: Side,
    /// Quantity rounded to 4 decimal places
    pub quantity: Decimal,
    /// Price rounded to 2 decimal places
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// A single malformed ticket field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ticket failed structural validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid order ticket: {}", join_fields(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Whether `field` is among the offending fields
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ticket is well formed but breaches a risk gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskViolation {
    /// Requested quantity is above the dynamic position cap
    #[error("quantity exceeds dynamic risk cap of {cap} (requested {requested})")]
    QuantityExceedsCap { requested: Decimal, cap: Decimal },
    /// Projected leverage after the order is above the limit
    #[error("leverage breach: projected {projected} exceeds limit {limit}")]
    LeverageBreach { projected: Decimal, limit: Decimal },
    /// Realized drawdown reached the halt threshold; blocks every order
    #[error("trading halted: drawdown limit reached ({drawdown} >= {limit})")]
    DrawdownHalt { drawdown: Decimal, limit: Decimal },
}

/// Order admission failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Risk violation: {0}")]
    Risk(#[from] RiskViolation),
}

impl AdmissionError {
    /// Whether resubmitting a corrected ticket can succeed
    ///
    /// Risk violations need different order parameters or a change in
    /// portfolio state, not a corrected ticket.
    pub fn is_retryable_with_correction(&self) -> bool {
        matches!(self, AdmissionError::Validation(_))
    }
}
