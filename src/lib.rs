//! # Balanced Run
//!
//! Longest contiguous run with as many zeros as ones, in one linear pass.
//!
//! The scan keeps a running balance (+1 for a one, -1 for a zero) and the
//! first position at which each balance value appeared. Two positions with
//! the same balance bound a balanced run, and pairing each position with the
//! *first* occurrence of its balance gives the longest such run ending there.
//!
//! ## Quick Start
//!
//! ```
//! use balanced_run::{longest_balanced_run_in_str, MarkerPolicy};
//!
//! assert_eq!(longest_balanced_run_in_str("11001", MarkerPolicy::Strict), Ok(4));
//! assert_eq!(longest_balanced_run_in_str("111", MarkerPolicy::Strict), Ok(0));
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Implement `std::error::Error` for [`InputFormatError`]
//! - `serde` - Enable serialization/deserialization support
//! - `cli` - Build the `balanced-run` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod error;
pub mod finder;
pub mod marker;
pub mod observer;
pub mod parse;
pub mod table;
pub mod words;

pub use error::InputFormatError;
pub use finder::{
    find_longest_balanced_run, longest_balanced_run, longest_balanced_run_in_bits,
    longest_balanced_run_in_ints, longest_balanced_run_in_str, longest_balanced_run_observed,
    BalancedRun, BalancedRunFinder,
};
pub use marker::{Marker, MarkerPolicy};
pub use observer::{BalanceObserver, NoopObserver, Step, StepEvent, StepLog};
pub use parse::InputFormat;
pub use table::FirstOccurrenceTable;
pub use words::longest_balanced_run_in_words;

/// Configuration for turning raw input into markers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// How values outside `{0, 1}` are treated (default: strict)
    pub policy: MarkerPolicy,
}

impl Config {
    /// Parse `input` in `format` and return the longest balanced run.
    ///
    /// ```
    /// use balanced_run::{Config, InputFormat};
    ///
    /// let config = Config::default();
    /// let run = config.find_in("5\n1 1 0 0 1\n", InputFormat::Counted).unwrap();
    /// assert_eq!(run.map(|r| r.len), Some(4));
    /// ```
    pub fn find_in(
        &self,
        input: &str,
        format: InputFormat,
    ) -> Result<Option<BalancedRun>, InputFormatError> {
        let markers = parse::parse(input, format, self.policy)?;
        Ok(find_longest_balanced_run(markers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_find_in() {
        let config = Config::default();
        assert_eq!(
            config.find_in("1100", InputFormat::BitString),
            Ok(Some(BalancedRun { start: 0, len: 4 }))
        );
        assert_eq!(config.find_in("", InputFormat::BitString), Ok(None));
        assert!(config.find_in("12", InputFormat::BitString).is_err());

        let permissive = Config {
            policy: MarkerPolicy::Permissive,
        };
        assert_eq!(
            permissive.find_in("12", InputFormat::BitString),
            Ok(None)
        );
        assert_eq!(
            permissive.find_in("2\n0 9", InputFormat::Counted),
            Ok(Some(BalancedRun { start: 0, len: 2 }))
        );
    }
}
