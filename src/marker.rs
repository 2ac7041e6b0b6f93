//! Binary markers and the policy used to classify raw input values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One element of the input sequence.
///
/// Uses the same convention as a balanced-parentheses bit sequence:
/// `One` contributes +1 to the running balance, `Zero` contributes -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    /// Zero-kind marker (`0`)
    Zero,
    /// One-kind marker (`1`)
    One,
}

impl Marker {
    /// Balance contribution of this marker: -1 for `Zero`, +1 for `One`.
    #[inline]
    pub const fn weight(self) -> isize {
        match self {
            Marker::Zero => -1,
            Marker::One => 1,
        }
    }

    /// Classify an integer value.
    ///
    /// Returns `None` when `policy` is [`MarkerPolicy::Strict`] and the value
    /// is neither 0 nor 1.
    ///
    /// ```
    /// use balanced_run::{Marker, MarkerPolicy};
    ///
    /// assert_eq!(Marker::from_int(1, MarkerPolicy::Strict), Some(Marker::One));
    /// assert_eq!(Marker::from_int(2, MarkerPolicy::Strict), None);
    /// assert_eq!(Marker::from_int(2, MarkerPolicy::Permissive), Some(Marker::One));
    /// ```
    #[inline]
    pub fn from_int(value: i64, policy: MarkerPolicy) -> Option<Marker> {
        match (value, policy) {
            (0, _) => Some(Marker::Zero),
            (1, _) => Some(Marker::One),
            (_, MarkerPolicy::Permissive) => Some(Marker::One),
            (_, MarkerPolicy::Strict) => None,
        }
    }

    /// Classify a character.
    ///
    /// Under [`MarkerPolicy::Permissive`] every character other than `'0'`
    /// counts as one-kind.
    #[inline]
    pub fn from_char(c: char, policy: MarkerPolicy) -> Option<Marker> {
        match (c, policy) {
            ('0', _) => Some(Marker::Zero),
            ('1', _) => Some(Marker::One),
            (_, MarkerPolicy::Permissive) => Some(Marker::One),
            (_, MarkerPolicy::Strict) => None,
        }
    }

    /// The canonical character for this marker.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Marker::Zero => '0',
            Marker::One => '1',
        }
    }
}

impl From<bool> for Marker {
    #[inline]
    fn from(bit: bool) -> Self {
        if bit {
            Marker::One
        } else {
            Marker::Zero
        }
    }
}

/// How values outside `{0, 1}` are treated when classifying input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarkerPolicy {
    /// Reject anything that is not exactly 0 or 1.
    #[default]
    Strict,
    /// Zero is zero-kind; every other value is one-kind.
    Permissive,
}
