//! Per-step observation hooks for the balanced-run scan.
//!
//! The scan itself performs no output. Anything that wants to trace it
//! (a logger, a test, a visualiser) implements [`BalanceObserver`] and is
//! called once after each marker has been processed.

#[cfg(not(test))]
use alloc::vec::Vec;

use crate::marker::Marker;

/// Outcome of processing one marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// The balance had not been seen before and was recorded at this index.
    FirstSeen,
    /// The balance was seen before, closing a balanced run.
    Recurred {
        /// Index where the balance was first seen; `None` for the sentinel
        /// position before the sequence starts.
        first_seen: Option<usize>,
        /// Length of the balanced run ending at this index.
        span: usize,
        /// Longest balanced run found so far, including this one.
        longest: usize,
    },
}

/// Snapshot of the scan after processing the marker at `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Zero-based index of the marker just processed
    pub index: usize,
    /// The marker at `index`
    pub marker: Marker,
    /// Running balance including this marker
    pub balance: isize,
    /// What happened to the first-occurrence table
    pub event: StepEvent,
}

/// Receives a [`Step`] after each marker is processed, in index order.
pub trait BalanceObserver {
    /// Called exactly once per marker.
    fn on_step(&mut self, step: &Step);
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl BalanceObserver for NoopObserver {
    #[inline(always)]
    fn on_step(&mut self, _step: &Step) {}
}

impl<O: BalanceObserver + ?Sized> BalanceObserver for &mut O {
    #[inline]
    fn on_step(&mut self, step: &Step) {
        (**self).on_step(step)
    }
}

/// Observer backed by a closure. Created with [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnObserver<F>(F);

impl<F: FnMut(&Step)> BalanceObserver for FnObserver<F> {
    #[inline]
    fn on_step(&mut self, step: &Step) {
        (self.0)(step)
    }
}

/// Wrap a closure as a [`BalanceObserver`].
///
/// ```
/// use balanced_run::observer::{from_fn, Step};
/// use balanced_run::{longest_balanced_run_observed, Marker};
///
/// let mut balances = Vec::new();
/// longest_balanced_run_observed(
///     [Marker::One, Marker::One, Marker::Zero],
///     from_fn(|step: &Step| balances.push(step.balance)),
/// );
/// assert_eq!(balances, vec![1, 2, 1]);
/// ```
pub fn from_fn<F: FnMut(&Step)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}

/// Observer that records every step.
///
/// ```
/// use balanced_run::{longest_balanced_run_observed, Marker, StepLog};
///
/// let mut log = StepLog::new();
/// let len = longest_balanced_run_observed([Marker::One, Marker::Zero], &mut log);
/// assert_eq!(len, 2);
/// assert_eq!(log.steps().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Consume the log, returning the recorded steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

impl BalanceObserver for StepLog {
    fn on_step(&mut self, step: &Step) {
        self.steps.push(*step);
    }
}
