//! Text input formats.
//!
//! Two layouts are accepted:
//!
//! - [`InputFormat::Counted`]: a count `n` followed by `n` integers, all
//!   whitespace separated and free to span lines. Tokens after the `n`-th
//!   marker are ignored.
//! - [`InputFormat::BitString`]: a single line of `0`/`1` characters. Only
//!   the first line is read and surrounding whitespace is trimmed.
//!
//! Under [`MarkerPolicy::Strict`] anything else is an error. Nothing is
//! silently coerced.

#[cfg(not(test))]
use alloc::{string::ToString, vec::Vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;
use crate::marker::{Marker, MarkerPolicy};

/// Layout of a textual marker sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InputFormat {
    /// Count followed by that many integer tokens
    Counted,
    /// One line of `0`/`1` characters
    BitString,
}

/// Parse `input` according to `format`.
pub fn parse(
    input: &str,
    format: InputFormat,
    policy: MarkerPolicy,
) -> Result<Vec<Marker>, InputFormatError> {
    match format {
        InputFormat::Counted => parse_counted(input, policy),
        InputFormat::BitString => parse_bit_string(input, policy),
    }
}

/// Parse a count followed by that many integer markers.
///
/// An input with no tokens at all is the empty sequence.
///
/// ```
/// use balanced_run::parse::parse_counted;
/// use balanced_run::{Marker, MarkerPolicy};
///
/// let markers = parse_counted("3\n1 0 1\n", MarkerPolicy::Strict).unwrap();
/// assert_eq!(markers, vec![Marker::One, Marker::Zero, Marker::One]);
/// ```
pub fn parse_counted(input: &str, policy: MarkerPolicy) -> Result<Vec<Marker>, InputFormatError> {
    let mut tokens = input.split_whitespace();

    let count = match tokens.next() {
        None => return Ok(Vec::new()),
        Some(token) => token
            .parse::<usize>()
            .map_err(|_| InputFormatError::InvalidCount {
                token: token.to_string(),
            })?,
    };

    // Don't trust the declared count for the allocation.
    let mut markers = Vec::with_capacity(count.min(input.len()));
    for position in 0..count {
        let token = tokens.next().ok_or(InputFormatError::MissingTokens {
            expected: count,
            found: position,
        })?;
        let value = token
            .parse::<i64>()
            .map_err(|_| InputFormatError::InvalidToken {
                position,
                token: token.to_string(),
            })?;
        let marker =
            Marker::from_int(value, policy).ok_or_else(|| InputFormatError::InvalidMarker {
                position,
                value: token.to_string(),
            })?;
        markers.push(marker);
    }

    Ok(markers)
}

/// Parse the first line of `input` as a string of marker characters.
///
/// ```
/// use balanced_run::parse::parse_bit_string;
/// use balanced_run::{Marker, MarkerPolicy};
///
/// let markers = parse_bit_string("10\n", MarkerPolicy::Strict).unwrap();
/// assert_eq!(markers, vec![Marker::One, Marker::Zero]);
/// ```
pub fn parse_bit_string(
    input: &str,
    policy: MarkerPolicy,
) -> Result<Vec<Marker>, InputFormatError> {
    let line = input.lines().next().unwrap_or("").trim();

    line.chars()
        .enumerate()
        .map(|(position, c)| {
            Marker::from_char(c, policy).ok_or_else(|| InputFormatError::InvalidMarker {
                position,
                value: c.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::marker::Marker::{One, Zero};

    #[test]
    fn test_counted_basic() {
        let markers = parse_counted("4\n1 1 0 0\n", MarkerPolicy::Strict).unwrap();
        assert_eq!(markers, vec![One, One, Zero, Zero]);
    }

    #[test]
    fn test_counted_spans_lines() {
        let markers = parse_counted("3\n1\n0\n  1", MarkerPolicy::Strict).unwrap();
        assert_eq!(markers, vec![One, Zero, One]);
    }

    #[test]
    fn test_counted_empty_input() {
        assert_eq!(parse_counted("", MarkerPolicy::Strict), Ok(vec![]));
        assert_eq!(parse_counted("  \n", MarkerPolicy::Strict), Ok(vec![]));
        assert_eq!(parse_counted("0\n", MarkerPolicy::Strict), Ok(vec![]));
    }

    #[test]
    fn test_counted_ignores_trailing_tokens() {
        let markers = parse_counted("2 1 0 junk 7", MarkerPolicy::Strict).unwrap();
        assert_eq!(markers, vec![One, Zero]);
    }

    #[test]
    fn test_counted_invalid_count() {
        assert_eq!(
            parse_counted("-1 0", MarkerPolicy::Strict),
            Err(InputFormatError::InvalidCount {
                token: "-1".to_string()
            })
        );
        assert_eq!(
            parse_counted("three", MarkerPolicy::Strict),
            Err(InputFormatError::InvalidCount {
                token: "three".to_string()
            })
        );
    }

    #[test]
    fn test_counted_missing_tokens() {
        assert_eq!(
            parse_counted("5\n1 0", MarkerPolicy::Strict),
            Err(InputFormatError::MissingTokens {
                expected: 5,
                found: 2
            })
        );
    }

    #[test]
    fn test_counted_invalid_token() {
        assert_eq!(
            parse_counted("2\n1 x", MarkerPolicy::Strict),
            Err(InputFormatError::InvalidToken {
                position: 1,
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn test_counted_policy() {
        assert_eq!(
            parse_counted("2\n2 0", MarkerPolicy::Strict),
            Err(InputFormatError::InvalidMarker {
                position: 0,
                value: "2".to_string()
            })
        );
        assert_eq!(
            parse_counted("2\n2 0", MarkerPolicy::Permissive),
            Ok(vec![One, Zero])
        );
    }

    #[test]
    fn test_bit_string_first_line_only() {
        let markers = parse_bit_string("  0110  \n1111\n", MarkerPolicy::Strict).unwrap();
        assert_eq!(markers, vec![Zero, One, One, Zero]);
    }

    #[test]
    fn test_bit_string_empty() {
        assert_eq!(parse_bit_string("", MarkerPolicy::Strict), Ok(vec![]));
        assert_eq!(parse_bit_string("\n", MarkerPolicy::Strict), Ok(vec![]));
    }

    #[test]
    fn test_bit_string_policy() {
        assert_eq!(
            parse_bit_string("1 0", MarkerPolicy::Strict),
            Err(InputFormatError::InvalidMarker {
                position: 1,
                value: " ".to_string()
            })
        );
        assert_eq!(
            parse_bit_string("1a0", MarkerPolicy::Permissive),
            Ok(vec![One, One, Zero])
        );
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(
            parse("2 0 1", InputFormat::Counted, MarkerPolicy::Strict),
            Ok(vec![Zero, One])
        );
        assert_eq!(
            parse("01", InputFormat::BitString, MarkerPolicy::Strict),
            Ok(vec![Zero, One])
        );
    }
}
