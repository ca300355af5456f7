//! Ticket schema validation
//!
//! Every field is checked and all problems are reported together, so a
//! client can correct the ticket in one pass.

use rust_decimal::Decimal;

use super::{FieldError, OrderTicket, OrderTicketInput, Side, ValidationError};

/// Minimum symbol length in characters
pub const MIN_SYMBOL_LEN: usize = 3;

impl OrderTicketInput {
    /// Parse into a structurally valid [`OrderTicket`]
    pub fn validate(&self) -> Result<OrderTicket, ValidationError> {
        let mut errors = Vec::new();

        if self.symbol.chars().count() < MIN_SYMBOL_LEN {
            errors.push(FieldError {
                field: "symbol",
                message: format!("must be at least {MIN_SYMBOL_LEN} characters"),
            });
        }

        let side = match self.side.parse::<Side>() {
            Ok(side) => Some(side),
            Err(message) => {
                errors.push(FieldError {
                    field: "side",
                    message,
                });
                None
            }
        };

        let quantity = positive("quantity", self.quantity, &mut errors);
        let price = positive("price", self.price, &mut errors);

        match (side, quantity, price) {
            (Some(side), Some(quantity), Some(price)) if errors.is_empty() => Ok(OrderTicket {
                symbol: self.symbol.clone(),
                side,
                quantity,
                price,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

fn positive(
    field: &'static str,
    value: Option<Decimal>,
    errors: &mut Vec<FieldError>,
) -> Option<Decimal> {
    match value {
        Some(v) if v > Decimal::ZERO => Some(v),
        Some(_) => {
            errors.push(FieldError {
                field,
                message: "must be positive".to_string(),
            });
            None
        }
        None => {
            errors.push(FieldError {
                field,
                message: "is required".to_string(),
            });
            None
        }
    }
}
