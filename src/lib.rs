//! # Tallyline - Keypad-Driven Desk Calculator
//!
//! An interactive arithmetic calculator driven by discrete keypad events.
//! The engine owns all calculation state; presentation layers stay thin
//! and stateless.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  InputEvent   ┌──────────────────┐
//! │ Presentation │──────────────►│ CalculatorEngine │
//! │              │               │                  │
//! │ - Buttons    │  display      │ - Entry buffer   │
//! │ - Rendering  │◄──────────────│ - Accumulator    │
//! │ - Token CLI  │   string      │ - Pending op     │
//! └──────────────┘               └──────────────────┘
//! ```
//!
//! The presentation side (button layout, rendering, the bundled token
//! CLI) maps each physical press to exactly one [`InputEvent`], feeds it
//! to the engine, and re-queries [`CalculatorEngine::display_text`] to
//! refresh what is shown. The engine never sees raw key input and never
//! fails: every press, valid or not, yields a well-defined next state.

pub mod cmd_args;
pub mod config;
pub mod engine;

// Re-export core types for easy access
pub use engine::*;
