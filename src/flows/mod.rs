//! Flows module - End-to-end commands built on the backends
//!
//! Provides:
//! - check: Scan the chart tree and report icon coverage

pub mod check;
