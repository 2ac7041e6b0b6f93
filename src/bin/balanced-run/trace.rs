//! Tracing-backed observer for the `--trace` flag.

use balanced_run::{BalanceObserver, Step, StepEvent};

/// Emits one `debug` event per processed marker.
#[derive(Debug, Default)]
pub struct TraceObserver;

impl BalanceObserver for TraceObserver {
    fn on_step(&mut self, step: &Step) {
        match step.event {
            StepEvent::FirstSeen => {
                tracing::debug!(
                    index = step.index,
                    value = %step.marker.as_char(),
                    balance = step.balance,
                    "new balance, storing index"
                );
            }
            StepEvent::Recurred {
                first_seen,
                span,
                longest,
            } => {
                // -1 is the position before the first marker
                let first_seen = first_seen.map_or(-1, |i| i as i64);
                tracing::debug!(
                    index = step.index,
                    value = %step.marker.as_char(),
                    balance = step.balance,
                    first_seen,
                    span,
                    longest,
                    "balance seen before"
                );
            }
        }
    }
}
