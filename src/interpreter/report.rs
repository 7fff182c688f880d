use std::fmt::{self, Write};

use crate::error::EvalError;

/// Capacity in bytes of the message buffer embedded in every context.
pub const ERROR_CAPACITY: usize = 256;

/// Fixed-capacity, human-readable error message.
///
/// Lives inline in the evaluation context, so reporting an error never
/// allocates. Text that does not fit is cut at a character boundary and the
/// message is marked as truncated.
#[derive(Debug, Clone, Default)]
pub struct ErrorMessage {
    buffer:    heapless::String<ERROR_CAPACITY>,
    truncated: bool,
}

impl ErrorMessage {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.buffer.as_str()
    }

    /// Returns `true` if no message has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if the last recorded message did not fit.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.truncated = false;
    }

    /// Replaces the buffer contents with the formatted error.
    ///
    /// # Example
    /// ```
    /// use expreval::{
    ///     error::{EvalError, ParseError},
    ///     interpreter::report::ErrorMessage,
    /// };
    ///
    /// let mut message = ErrorMessage::new();
    /// message.record(&EvalError::Syntax(ParseError::MalformedNumber { position: 3 }));
    /// assert_eq!(message.as_str(), "syntax error: malformed number literal at position 3");
    /// ```
    pub fn record(&mut self, error: &EvalError<'_>) {
        self.clear();
        // Overflow is absorbed by `write_str`.
        let _ = write!(self, "{error}");
    }
}

impl Write for ErrorMessage {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }
        for c in s.chars() {
            if self.buffer.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ErrorMessage {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
