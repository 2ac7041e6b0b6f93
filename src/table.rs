//! First-occurrence table mapping balance values to the earliest prefix
//! length at which they were observed.
//!
//! Each marker moves the balance by exactly one, so the balances seen so far
//! always form a contiguous range `[min, max]` containing 0. A balance that
//! has not been seen yet is therefore either `max + 1` or `min - 1`, and
//! inserting it is a push onto one of two vectors:
//!
//! ```text
//! balance:       ... -3 -2 -1 | 0  1  2  3 ...
//! storage:   negative[2][1][0] | non_negative[0][1][2][3]
//! ```
//!
//! Entries are prefix lengths, not element indices: prefix length `p` means
//! "after the first `p` markers", so the sentinel "index -1" is simply
//! prefix length 0.

#[cfg(not(test))]
use alloc::vec::Vec;

/// Balance value to first prefix length, seeded with `0 -> 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirstOccurrenceTable {
    /// Entry `b` holds the first prefix length with balance `b`
    non_negative: Vec<usize>,
    /// Entry `k` holds the first prefix length with balance `-(k + 1)`
    negative: Vec<usize>,
}

impl FirstOccurrenceTable {
    /// Create a table holding only the sentinel entry.
    pub fn new() -> Self {
        let mut non_negative = Vec::new();
        non_negative.push(0);
        Self {
            non_negative,
            negative: Vec::new(),
        }
    }

    /// Create a table sized for a sequence of `n` markers.
    ///
    /// Only the non-negative side is reserved. Both sides together never
    /// hold more than `n + 1` entries, so the negative side grows on demand.
    pub fn with_capacity(n: usize) -> Self {
        let mut non_negative = Vec::with_capacity(n.saturating_add(1));
        non_negative.push(0);
        Self {
            non_negative,
            negative: Vec::new(),
        }
    }

    /// Prefix length at which `balance` was first observed.
    #[inline]
    pub fn first_seen(&self, balance: isize) -> Option<usize> {
        if balance >= 0 {
            self.non_negative.get(balance as usize).copied()
        } else {
            self.negative.get(negative_slot(balance)).copied()
        }
    }

    /// Record `balance` as first observed at `prefix_len`.
    ///
    /// Returns `false` and leaves the table untouched if `balance` is already
    /// present; the earliest occurrence is never overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `balance` is new but not adjacent to the observed range.
    pub fn record(&mut self, balance: isize, prefix_len: usize) -> bool {
        let (slot, entries) = if balance >= 0 {
            (balance as usize, &mut self.non_negative)
        } else {
            (negative_slot(balance), &mut self.negative)
        };

        if slot < entries.len() {
            return false;
        }
        assert_eq!(
            slot,
            entries.len(),
            "balance {} is not adjacent to the observed range",
            balance
        );
        entries.push(prefix_len);
        true
    }

    /// Number of distinct balance values recorded, sentinel included.
    #[inline]
    pub fn distinct_balances(&self) -> usize {
        self.non_negative.len() + self.negative.len()
    }

    /// Smallest balance recorded so far.
    #[inline]
    pub fn min_balance(&self) -> isize {
        -(self.negative.len() as isize)
    }

    /// Largest balance recorded so far.
    #[inline]
    pub fn max_balance(&self) -> isize {
        self.non_negative.len() as isize - 1
    }
}

impl Default for FirstOccurrenceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn negative_slot(balance: isize) -> usize {
    debug_assert!(balance < 0);
    (-(balance + 1)) as usize
}
