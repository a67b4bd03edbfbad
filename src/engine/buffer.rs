//! # Entry Buffer
//!
//! Raw display buffer model. Holds the characters the user is typing (or
//! the raw text of the last computed result) without any grouping
//! separators; formatting happens at query time and is never written back
//! here, so editing operations always work on clean text.

/// Raw text under construction by digit, decimal, and delete presses
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    /// Create new empty buffer
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Get the raw text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get buffer length (character count, no separators are ever stored)
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check whether nothing has been entered
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether a decimal point is already present
    pub fn has_decimal(&self) -> bool {
        self.text.contains('.')
    }

    /// Append one digit (0-9) to the entry
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        self.text.push((b'0' + digit) as char);
    }

    /// Append a decimal point unless one is already present
    pub fn push_decimal(&mut self) {
        if !self.has_decimal() {
            self.text.push('.');
        }
    }

    /// Remove the last entered character, if any
    pub fn delete_last(&mut self) {
        self.text.pop();
    }

    /// Discard all content
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the whole entry with new raw text
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Numeric value of the entry. Empty or unparsable text coerces to 0,
    /// mirroring how the rest of the engine treats "nothing typed yet".
    pub fn numeric_value(&self) -> f64 {
        self.text.parse().unwrap_or(0.0)
    }
}
