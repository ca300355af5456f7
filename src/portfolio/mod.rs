//! Portfolio snapshot module
//!
//! Combines base positions, exposures and history with derived risk metrics

mod snapshot;
mod source;
mod types;

pub use snapshot::{SnapshotBuilder, SnapshotPolicy};
pub use source::{PortfolioSource, SampleBook};
pub use types::{BaseMetrics, BaseSnapshot, ExposureBucket, PortfolioReport, PortfolioSnapshot, Position};
