#![forbid(unsafe_code)]

//! Core arithmetic and audit logging for the `calc` calculator.
//!
//! This crate provides:
//! - Domain types (operations, log entries)
//! - The calculator contract and its plain implementation
//! - The in-process operation log
//! - The logging interceptor that wraps any calculator
//! - Configuration and tracing setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod engine;
pub mod operation_log;
pub mod interceptor;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use engine::{BasicCalculator, Calculator};
pub use operation_log::OperationLog;
pub use interceptor::{create_calculator, format_invocation, format_result, LoggingCalculator};
