//! Core domain types for the calculator.
//!
//! This module defines:
//! - The fixed set of arithmetic operations and their display strings
//! - Audit log entries

use std::fmt;

// ============================================================================
// Operations
// ============================================================================

/// One of the four arithmetic operations exposed by a [`crate::Calculator`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in menu order
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Contract method name, used in invocation lines
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Noun used in result lines ("Result of addition ...")
    pub fn result_phrase(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }

    /// Label shown in the interactive menu
    pub fn menu_label(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
        }
    }

    /// Map a 1-based menu selection to an operation
    pub fn from_menu_choice(choice: u32) -> Option<Operation> {
        match choice {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            4 => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Whether calls to this operation are recorded by the logging interceptor.
    ///
    /// The loggable set is fixed at compile time; every arithmetic operation
    /// is currently registered.
    pub fn is_loggable(self) -> bool {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide => {
                true
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Log Entries
// ============================================================================

/// Kind of audit line produced by the interceptor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// Written before the call is forwarded
    Invocation,
    /// Written after a successful call returns
    Result,
}

/// An immutable line in the operation log
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub line: String,
}

impl LogEntry {
    pub fn invocation(line: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Invocation,
            line: line.into(),
        }
    }

    pub fn result(line: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Result,
            line: line.into(),
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Render an operand the way log and result lines show it.
///
/// Whole numbers keep a trailing `.0` (`2.0`, `-0.0`).
pub fn format_operand(value: f64) -> String {
    format!("{:?}", value)
}
