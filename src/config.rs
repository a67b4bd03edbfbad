//! Configuration constants and utilities for tallyline
//!
//! Display and entry tuning lives here so the engine and the formatter
//! agree on one set of numbers.

/// Maximum characters in the entry buffer while actively typing
pub const MAX_ENTRY_LEN: usize = 12;

/// Maximum fraction digits shown in fixed-point display
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Magnitude at and above which the display switches to exponential notation
pub const EXP_UPPER_THRESHOLD: f64 = 1e12;

/// Nonzero magnitude below which the display switches to exponential notation
pub const EXP_LOWER_THRESHOLD: f64 = 1e-6;

/// Separator between thousands groups in fixed-point display
pub const GROUP_SEPARATOR: char = ',';

/// Default prompt for interactive sessions
pub const DEFAULT_PROMPT: &str = "> ";

/// Environment variable name for overriding the interactive prompt
pub const PROMPT_ENV_VAR: &str = "TALLYLINE_PROMPT";

/// Get the interactive prompt, checking environment variable first, then falling back to default
pub fn get_prompt() -> String {
    std::env::var_os(PROMPT_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string())
}
