//! # Calculator State Machine
//!
//! `CalculatorEngine` interprets discrete keypad presses into a running
//! left-to-right calculation: digits build up a raw entry, operators fold
//! the entry into the accumulator, equals settles the pending operation.
//! The API is infallible; invalid presses are silent no-ops.

use serde::Serialize;

use super::buffer::EntryBuffer;
use super::events::{InputEvent, Operator};
use super::format::{format_value, ERROR_TEXT};
use crate::config::MAX_ENTRY_LEN;

/// A computed value held by the accumulator: a plain number, or the
/// sticky marker produced by dividing by zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Error,
}

/// Read-only copy of the observable engine state, for presentation
/// layers and tests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Current display string
    pub display: String,
    /// Operator awaiting its right-hand operand, if any
    pub pending: Option<Operator>,
    /// True when the next digit starts a fresh number
    pub awaiting_input: bool,
    /// True while the sticky error state is latched
    pub error: bool,
}

/// The calculator engine: owns all calculation state, one entry point
/// per keypad press, and a query for the current display string
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    /// Left-hand operand of the pending operation; absent until the
    /// first operator press after construction or reset
    accumulator: Option<Value>,
    /// Operator awaiting its right-hand operand
    pending: Option<Operator>,
    /// Raw text being typed, or the raw text of the last result
    entry: EntryBuffer,
    /// True right after an operator or equals: the next digit or decimal
    /// overwrites the entry instead of appending to it
    awaiting_input: bool,
}

impl CalculatorEngine {
    /// Create an engine in the pristine state (display `"0"`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Route one keypad press to its handler
    pub fn press(&mut self, event: InputEvent) {
        match event {
            InputEvent::Digit(digit) => self.press_digit(digit),
            InputEvent::Decimal => self.press_decimal(),
            InputEvent::Delete => self.press_delete(),
            InputEvent::Reset => self.press_reset(),
            InputEvent::Operator(op) => self.press_operator(op),
            InputEvent::Equals => self.press_equals(),
        }
    }

    /// Enter one digit. Starts a fresh number after an operator or
    /// equals; otherwise appends, up to the entry length cap.
    pub fn press_digit(&mut self, digit: u8) {
        if digit > 9 || self.in_error() {
            return;
        }
        if self.awaiting_input {
            self.entry.replace(digit.to_string());
            self.awaiting_input = false;
        } else if self.entry.len() >= MAX_ENTRY_LEN {
            tracing::debug!("Entry at capacity, digit {} ignored", digit);
        } else {
            self.entry.push_digit(digit);
        }
    }

    /// Enter the decimal point. A fresh number starts as `0.`; duplicate
    /// points within one number are ignored.
    pub fn press_decimal(&mut self) {
        if self.in_error() {
            return;
        }
        if self.awaiting_input {
            self.entry.replace("0.");
            self.awaiting_input = false;
        } else {
            self.entry.push_decimal();
        }
    }

    /// Remove the last entered character. Deleting past an empty entry
    /// stays at display `"0"`.
    pub fn press_delete(&mut self) {
        if self.in_error() {
            return;
        }
        self.entry.delete_last();
    }

    /// Restore the exact construction-time state
    pub fn press_reset(&mut self) {
        tracing::debug!("Reset to pristine state");
        *self = Self::default();
    }

    /// Latch an operator. Folds the current entry into the accumulator
    /// when a right-hand operand has been typed; pressing another
    /// operator before any new digit only substitutes the pending one.
    pub fn press_operator(&mut self, op: Operator) {
        if self.in_error() {
            return;
        }
        match self.accumulator {
            None => {
                self.accumulator = Some(Value::Number(self.entry.numeric_value()));
            }
            Some(accumulator) if !self.awaiting_input => {
                let result = apply(self.pending, accumulator, self.entry.numeric_value());
                self.commit_result(result);
            }
            Some(_) => {
                tracing::debug!("Operator substituted: {:?} -> {:?}", self.pending, op);
            }
        }
        self.pending = Some(op);
        self.awaiting_input = true;
    }

    /// Settle the pending operation. A no-op unless an operator is
    /// pending and a real right-hand operand has been typed since it.
    pub fn press_equals(&mut self) {
        if self.in_error() || self.awaiting_input {
            return;
        }
        let (Some(accumulator), Some(op)) = (self.accumulator, self.pending) else {
            return;
        };
        let result = apply(Some(op), accumulator, self.entry.numeric_value());
        self.commit_result(result);
        self.pending = None;
        self.awaiting_input = true;
    }

    /// Current display string: `"0"` before anything is typed, `"Error"`
    /// while the error state is latched, otherwise the entry's numeric
    /// value passed through the display formatter (even mid-entry)
    pub fn display_text(&self) -> String {
        if self.in_error() {
            return ERROR_TEXT.to_string();
        }
        if self.entry.is_empty() {
            return "0".to_string();
        }
        format_value(self.entry.numeric_value())
    }

    /// Take a read-only snapshot of the observable state
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display_text(),
            pending: self.pending,
            awaiting_input: self.awaiting_input,
            error: self.in_error(),
        }
    }

    /// Division by zero latches the engine: every press except reset is
    /// a no-op until the user starts over
    fn in_error(&self) -> bool {
        matches!(self.accumulator, Some(Value::Error))
    }

    /// Write a computed result into the accumulator and the entry. The
    /// entry receives the raw round-trip text of the number, never the
    /// grouped display form, so later deletes edit clean text.
    fn commit_result(&mut self, result: Value) {
        tracing::debug!("Result committed: {:?}", result);
        match result {
            Value::Number(number) => self.entry.replace(number.to_string()),
            Value::Error => self.entry.clear(),
        }
        self.accumulator = Some(result);
    }
}

/// Apply the pending operation to the accumulator and the entered
/// operand. A `None` operation returns the accumulator unchanged (an
/// operator pressed right after equals lands here). An error-marker
/// accumulator propagates unconditionally.
fn apply(op: Option<Operator>, accumulator: Value, operand: f64) -> Value {
    let Value::Number(lhs) = accumulator else {
        return Value::Error;
    };
    match op {
        Some(Operator::Add) => Value::Number(lhs + operand),
        Some(Operator::Subtract) => Value::Number(lhs - operand),
        Some(Operator::Multiply) => Value::Number(lhs * operand),
        Some(Operator::Divide) if operand == 0.0 => Value::Error,
        Some(Operator::Divide) => Value::Number(lhs / operand),
        None => Value::Number(lhs),
    }
}
