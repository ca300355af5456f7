//! riskdesk: order-admission risk engine
//!
//! This library provides the core components for:
//! - Historical VaR, expected shortfall, drawdown and Kelly metrics
//! - Dynamic position sizing against operator risk controls
//! - Portfolio snapshots with freshly derived risk metrics
//! - Order ticket validation and pre-trade risk gates
//! - An owned, newest-first ledger of accepted orders
//! - Structured logging and metrics

pub mod cli;
pub mod config;
pub mod execution;
pub mod portfolio;
pub mod risk;
pub mod telemetry;
