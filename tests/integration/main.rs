//! Integration tests for riskdesk

mod admission_test;
mod snapshot_test;
