//! Logging interceptor for any [`Calculator`].
//!
//! [`LoggingCalculator`] satisfies the same contract as the calculator it
//! wraps. Every call to a loggable operation records an invocation line
//! before forwarding, and a result line after a successful return. Failures
//! pass through untouched and leave no result line behind.

use crate::types::format_operand;
use crate::{BasicCalculator, Calculator, LogEntry, Operation, OperationLog, Result};

/// Marker prefixed to every invocation line
pub const INVOCATION_PREFIX: &str = "Calling: ";

/// Render `Calling: <name>(<arg0>, <arg1>, ...)`
pub fn format_invocation(op: Operation, args: &[f64]) -> String {
    let rendered: Vec<String> = args.iter().copied().map(format_operand).collect();
    format!("{}{}({})", INVOCATION_PREFIX, op.name(), rendered.join(", "))
}

/// Render `Result of <phrase> <a> and <b> = <result>`
pub fn format_result(op: Operation, a: f64, b: f64, result: f64) -> String {
    format!(
        "Result of {} {} and {} = {}",
        op.result_phrase(),
        format_operand(a),
        format_operand(b),
        format_operand(result)
    )
}

/// A calculator wrapper that records every call in an [`OperationLog`]
pub struct LoggingCalculator<'log, C> {
    inner: C,
    log: &'log OperationLog,
}

impl<'log, C: Calculator> LoggingCalculator<'log, C> {
    pub fn new(inner: C, log: &'log OperationLog) -> Self {
        Self { inner, log }
    }

    /// Run `forward` against the wrapped calculator with logging around it.
    ///
    /// Order for a single call: invocation line, forwarded computation,
    /// result line. The result line is skipped when `forward` fails.
    fn call_logged<F>(&self, op: Operation, a: f64, b: f64, forward: F) -> Result<f64>
    where
        F: FnOnce(&C, f64, f64) -> Result<f64>,
    {
        if !op.is_loggable() {
            return forward(&self.inner, a, b);
        }

        self.log
            .append(LogEntry::invocation(format_invocation(op, &[a, b])));

        let result = forward(&self.inner, a, b);
        match &result {
            Ok(value) => {
                self.log
                    .append(LogEntry::result(format_result(op, a, b, *value)));
            }
            Err(e) => {
                tracing::debug!("{} failed, no result recorded: {}", op, e);
            }
        }
        result
    }
}

impl<C: Calculator> Calculator for LoggingCalculator<'_, C> {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        self.call_logged(Operation::Add, a, b, C::add)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        self.call_logged(Operation::Subtract, a, b, C::subtract)
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64> {
        self.call_logged(Operation::Multiply, a, b, C::multiply)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64> {
        self.call_logged(Operation::Divide, a, b, C::divide)
    }
}

/// Build the plain calculator wrapped in logging against `log`
pub fn create_calculator(log: &OperationLog) -> LoggingCalculator<'_, BasicCalculator> {
    LoggingCalculator::new(BasicCalculator, log)
}
