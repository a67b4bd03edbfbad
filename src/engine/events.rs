//! # Input Events
//!
//! Boundary types spoken by the presentation layer. Each physical button
//! maps to exactly one `InputEvent`; the engine consumes events one at a
//! time and never sees raw key input.

use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Arithmetic operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad symbol for this operator
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// One discrete keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A digit key, 0-9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// The DEL key (remove last entered character)
    Delete,
    /// The RESET key (back to the pristine state)
    Reset,
    /// An operator key
    Operator(Operator),
    /// The equals key
    Equals,
}

impl FromStr for InputEvent {
    type Err = anyhow::Error;

    /// Map a button token to its event: `0`-`9`, `.`, `+`, `-`, `*` (or
    /// `x`), `/`, `=`, `del`, `reset` (or `c`)
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "." => Ok(InputEvent::Decimal),
            "+" => Ok(InputEvent::Operator(Operator::Add)),
            "-" => Ok(InputEvent::Operator(Operator::Subtract)),
            "*" | "x" => Ok(InputEvent::Operator(Operator::Multiply)),
            "/" => Ok(InputEvent::Operator(Operator::Divide)),
            "=" => Ok(InputEvent::Equals),
            "del" => Ok(InputEvent::Delete),
            "reset" | "c" => Ok(InputEvent::Reset),
            digit if digit.len() == 1 && digit.as_bytes()[0].is_ascii_digit() => {
                Ok(InputEvent::Digit(digit.as_bytes()[0] - b'0'))
            }
            other => Err(anyhow!("unknown keypad token '{other}'")),
        }
    }
}
