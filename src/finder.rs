//! Longest balanced run search.
//!
//! A run `(j, i]` holds as many zeros as ones exactly when the running
//! balance after `j` equals the running balance after `i`. Scanning once and
//! remembering only the first position of every balance value gives, at each
//! recurrence, the longest balanced run ending there. The maximum over all
//! positions is the answer.
//!
//! # Example
//!
//! ```
//! use balanced_run::{find_longest_balanced_run, longest_balanced_run, Marker};
//!
//! let markers = [Marker::One, Marker::One, Marker::Zero, Marker::Zero, Marker::One];
//! assert_eq!(longest_balanced_run(markers), 4);
//!
//! let run = find_longest_balanced_run(markers).unwrap();
//! assert_eq!(run.range(), 0..4);
//! ```

#[cfg(not(test))]
use alloc::string::ToString;

use core::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InputFormatError;
use crate::marker::{Marker, MarkerPolicy};
use crate::observer::{BalanceObserver, NoopObserver, Step, StepEvent};
use crate::table::FirstOccurrenceTable;

/// Location of a balanced run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancedRun {
    /// Index of the first marker in the run
    pub start: usize,
    /// Number of markers in the run (always even and non-zero)
    pub len: usize,
}

impl BalancedRun {
    /// Index one past the last marker in the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// The run as an index range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Streaming balanced-run search.
///
/// Markers are fed one at a time with [`push`](Self::push) or in bulk via
/// [`Extend`]. After every marker the observer receives a [`Step`].
///
/// ```
/// use balanced_run::{BalancedRunFinder, Marker};
///
/// let mut finder = BalancedRunFinder::new();
/// finder.push(Marker::Zero);
/// assert_eq!(finder.longest(), 0);
/// finder.push(Marker::One);
/// assert_eq!(finder.longest(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BalancedRunFinder<O = NoopObserver> {
    table: FirstOccurrenceTable,
    balance: isize,
    consumed: usize,
    best: Option<BalancedRun>,
    observer: O,
}

impl BalancedRunFinder<NoopObserver> {
    /// Create a finder with no observer.
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }

    /// Create a finder pre-sized for `n` markers.
    pub fn with_capacity(n: usize) -> Self {
        Self::with_observer_and_capacity(NoopObserver, n)
    }
}

impl Default for BalancedRunFinder<NoopObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: BalanceObserver> BalancedRunFinder<O> {
    /// Create a finder that reports every step to `observer`.
    pub fn with_observer(observer: O) -> Self {
        Self::with_observer_and_capacity(observer, 0)
    }

    /// Create a finder with an observer, pre-sized for `n` markers.
    pub fn with_observer_and_capacity(observer: O, n: usize) -> Self {
        Self {
            table: FirstOccurrenceTable::with_capacity(n),
            balance: 0,
            consumed: 0,
            best: None,
            observer,
        }
    }

    /// Process the next marker.
    pub fn push(&mut self, marker: Marker) {
        let index = self.consumed;
        self.balance += marker.weight();
        self.consumed += 1;

        let event = match self.table.first_seen(self.balance) {
            Some(prefix_len) => {
                let span = self.consumed - prefix_len;
                if span > self.longest() {
                    self.best = Some(BalancedRun {
                        start: prefix_len,
                        len: span,
                    });
                }
                StepEvent::Recurred {
                    first_seen: prefix_len.checked_sub(1),
                    span,
                    longest: self.longest(),
                }
            }
            None => {
                self.table.record(self.balance, self.consumed);
                StepEvent::FirstSeen
            }
        };

        self.observer.on_step(&Step {
            index,
            marker,
            balance: self.balance,
            event,
        });
    }

    /// Number of markers processed.
    #[inline]
    pub fn len(&self) -> usize {
        self.consumed
    }

    /// Returns true if no marker has been processed yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.consumed == 0
    }

    /// Current running balance (ones minus zeros).
    #[inline]
    pub fn balance(&self) -> isize {
        self.balance
    }

    /// Length of the longest balanced run seen so far.
    #[inline]
    pub fn longest(&self) -> usize {
        self.best.map_or(0, |run| run.len)
    }

    /// The longest balanced run seen so far, if any.
    #[inline]
    pub fn best(&self) -> Option<BalancedRun> {
        self.best
    }

    /// The first-occurrence table built so far.
    #[inline]
    pub fn table(&self) -> &FirstOccurrenceTable {
        &self.table
    }

    /// Finish the scan, returning the best run and the observer.
    pub fn finish(self) -> (Option<BalancedRun>, O) {
        (self.best, self.observer)
    }
}

impl<O: BalanceObserver> Extend<Marker> for BalancedRunFinder<O> {
    fn extend<I: IntoIterator<Item = Marker>>(&mut self, iter: I) {
        for marker in iter {
            self.push(marker);
        }
    }
}

/// Length of the longest contiguous run with equally many zeros and ones.
///
/// Returns 0 for an empty sequence or when no balanced run exists.
pub fn longest_balanced_run<I>(markers: I) -> usize
where
    I: IntoIterator<Item = Marker>,
{
    find_longest_balanced_run(markers).map_or(0, |run| run.len)
}

/// Location of the longest balanced run.
///
/// When several runs share the maximum length, the one that ends first is
/// returned. Returns `None` when no balanced run exists.
pub fn find_longest_balanced_run<I>(markers: I) -> Option<BalancedRun>
where
    I: IntoIterator<Item = Marker>,
{
    let iter = markers.into_iter();
    let mut finder = BalancedRunFinder::with_capacity(iter.size_hint().0);
    finder.extend(iter);
    finder.best()
}

/// Like [`longest_balanced_run`], reporting every step to `observer`.
pub fn longest_balanced_run_observed<I, O>(markers: I, observer: O) -> usize
where
    I: IntoIterator<Item = Marker>,
    O: BalanceObserver,
{
    let iter = markers.into_iter();
    let mut finder = BalancedRunFinder::with_observer_and_capacity(observer, iter.size_hint().0);
    finder.extend(iter);
    finder.longest()
}

/// Longest balanced run over a slice of bits (`true` is one-kind).
pub fn longest_balanced_run_in_bits(bits: &[bool]) -> usize {
    longest_balanced_run(bits.iter().map(|&bit| Marker::from(bit)))
}

/// Longest balanced run over the characters of `s`.
///
/// Every character is a marker; no trimming is applied.
pub fn longest_balanced_run_in_str(
    s: &str,
    policy: MarkerPolicy,
) -> Result<usize, InputFormatError> {
    let mut finder = BalancedRunFinder::with_capacity(s.len());
    for (position, c) in s.chars().enumerate() {
        let marker = Marker::from_char(c, policy).ok_or_else(|| {
            InputFormatError::InvalidMarker {
                position,
                value: c.to_string(),
            }
        })?;
        finder.push(marker);
    }
    Ok(finder.longest())
}

/// Longest balanced run over integer markers.
pub fn longest_balanced_run_in_ints(
    values: &[i64],
    policy: MarkerPolicy,
) -> Result<usize, InputFormatError> {
    let mut finder = BalancedRunFinder::with_capacity(values.len());
    for (position, &value) in values.iter().enumerate() {
        let marker = Marker::from_int(value, policy).ok_or_else(|| {
            InputFormatError::InvalidMarker {
                position,
                value: value.to_string(),
            }
        })?;
        finder.push(marker);
    }
    Ok(finder.longest())
}
