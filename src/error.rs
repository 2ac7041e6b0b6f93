//! Input format errors.
//!
//! The balanced-run computation itself cannot fail. These errors come from
//! turning caller-supplied text or integers into markers.

#[cfg(not(test))]
use alloc::string::String;

use core::fmt;

/// Errors raised while interpreting input as a sequence of binary markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFormatError {
    /// The leading element count is not a non-negative integer.
    InvalidCount {
        /// The offending token
        token: String,
    },

    /// A token that should hold a marker is not an integer.
    InvalidToken {
        /// Zero-based marker index
        position: usize,
        /// The offending token
        token: String,
    },

    /// A value that is neither zero-kind nor one-kind under the strict policy.
    InvalidMarker {
        /// Zero-based marker index
        position: usize,
        /// The rejected value, rendered as text
        value: String,
    },

    /// Fewer marker tokens were available than the declared count.
    MissingTokens {
        /// Declared count
        expected: usize,
        /// Tokens actually present
        found: usize,
    },
}

impl fmt::Display for InputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputFormatError::InvalidCount { token } => {
                write!(f, "invalid element count '{}'", token)
            }
            InputFormatError::InvalidToken { position, token } => {
                write!(f, "invalid token '{}' at position {}", token, position)
            }
            InputFormatError::InvalidMarker { position, value } => {
                write!(
                    f,
                    "value '{}' at position {} is not a binary marker (expected 0 or 1)",
                    value, position
                )
            }
            InputFormatError::MissingTokens { expected, found } => {
                write!(
                    f,
                    "expected {} markers but only {} were provided",
                    expected, found
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputFormatError {}
