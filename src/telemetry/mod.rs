//! Telemetry module
//!
//! Structured logging and metric recording

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{record_order, set_gauge, GaugeMetric, OrderOutcome};

use crate::config::TelemetryConfig;

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    init_logging(&config.log_level, config.log_format)
}
