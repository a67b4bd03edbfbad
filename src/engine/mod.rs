//! # Calculator Engine
//!
//! The input/calculation state machine and its supporting pieces. The
//! engine interprets a sequence of discrete keypad events into a running
//! left-to-right calculation and exposes one formatted display string.

pub mod buffer;
pub mod events;
pub mod format;
pub mod state;

// Re-export all types for easy access
pub use buffer::EntryBuffer;
pub use events::{InputEvent, Operator};
pub use format::{format_value, ERROR_TEXT};
pub use state::{CalculatorEngine, EngineSnapshot, Value};
