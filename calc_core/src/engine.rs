//! The calculator contract and its plain arithmetic implementation.
//!
//! [`BasicCalculator`] knows nothing about logging. Cross-cutting behavior is
//! layered on by wrapping it (see [`crate::interceptor`]).

use crate::{Error, Operation, Result};

/// The arithmetic contract shared by the plain engine and every wrapper.
///
/// All four operations share one signature so wrappers can treat them
/// uniformly. Only [`Calculator::divide`] can fail.
pub trait Calculator {
    fn add(&self, a: f64, b: f64) -> Result<f64>;
    fn subtract(&self, a: f64, b: f64) -> Result<f64>;
    fn multiply(&self, a: f64, b: f64) -> Result<f64>;
    fn divide(&self, a: f64, b: f64) -> Result<f64>;

    /// Dispatch an [`Operation`] to the matching contract method
    fn apply(&self, op: Operation, a: f64, b: f64) -> Result<f64> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }
}

impl<C: Calculator + ?Sized> Calculator for &C {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        (**self).add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        (**self).subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64> {
        (**self).multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64> {
        (**self).divide(a, b)
    }
}

/// Stateless native floating-point arithmetic
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicCalculator;

impl Calculator for BasicCalculator {
    fn add(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a + b)
    }

    fn subtract(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a - b)
    }

    fn multiply(&self, a: f64, b: f64) -> Result<f64> {
        Ok(a * b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64> {
        // Exact comparison: -0.0 == 0.0, but 1e-300 is a valid divisor.
        if b == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }
}
