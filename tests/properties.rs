//! Property-based tests for the balanced-run search.

use balanced_run::{
    find_longest_balanced_run, longest_balanced_run, longest_balanced_run_in_bits,
    longest_balanced_run_in_ints, longest_balanced_run_in_str, longest_balanced_run_in_words,
    longest_balanced_run_observed, Marker, MarkerPolicy, StepEvent, StepLog,
};
use proptest::prelude::*;

/// O(n^2) reference: check every subrange.
fn brute_force(bits: &[bool]) -> usize {
    let mut best = 0;
    for start in 0..bits.len() {
        let mut balance = 0isize;
        for (offset, &bit) in bits[start..].iter().enumerate() {
            balance += if bit { 1 } else { -1 };
            if balance == 0 {
                best = best.max(offset + 1);
            }
        }
    }
    best
}

fn to_markers(bits: &[bool]) -> Vec<Marker> {
    bits.iter().map(|&b| Marker::from(b)).collect()
}

fn pack_words(bits: &[bool]) -> Vec<u64> {
    let mut words = vec![0u64; bits.len().div_ceil(64)];
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            words[i / 64] |= 1 << (i % 64);
        }
    }
    words
}

proptest! {
    /// Linear scan matches the quadratic reference
    #[test]
    fn prop_matches_brute_force(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        prop_assert_eq!(longest_balanced_run(to_markers(&bits)), brute_force(&bits));
    }

    /// Biased inputs exercise long one-sided stretches
    #[test]
    fn prop_matches_brute_force_biased(
        bits in prop::collection::vec(prop::bool::weighted(0.85), 0..200)
    ) {
        prop_assert_eq!(longest_balanced_run(to_markers(&bits)), brute_force(&bits));
    }

    /// Result is even and never exceeds the input length
    #[test]
    fn prop_even_and_bounded(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let len = longest_balanced_run_in_bits(&bits);
        prop_assert_eq!(len % 2, 0);
        prop_assert!(len <= bits.len());
    }

    /// The reported location really is balanced and has the reported length
    #[test]
    fn prop_reported_run_is_balanced(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        match find_longest_balanced_run(to_markers(&bits)) {
            Some(run) => {
                prop_assert!(run.len > 0);
                prop_assert!(run.end() <= bits.len());
                let ones = bits[run.range()].iter().filter(|&&b| b).count();
                prop_assert_eq!(ones * 2, run.len);
                prop_assert_eq!(run.len, brute_force(&bits));
            }
            None => {
                prop_assert_eq!(brute_force(&bits), 0);
            }
        }
    }

    /// Characters, integers, bools and packed words all give the same answer
    #[test]
    fn prop_representation_independent(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let expected = longest_balanced_run_in_bits(&bits);

        let s: String = bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
        prop_assert_eq!(longest_balanced_run_in_str(&s, MarkerPolicy::Strict), Ok(expected));

        let ints: Vec<i64> = bits.iter().map(|&b| b as i64).collect();
        prop_assert_eq!(longest_balanced_run_in_ints(&ints, MarkerPolicy::Strict), Ok(expected));

        let words = pack_words(&bits);
        prop_assert_eq!(longest_balanced_run_in_words(&words, bits.len()), expected);
    }

    /// Flipping every marker mirrors the balance and keeps the answer
    #[test]
    fn prop_complement_invariant(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let flipped: Vec<bool> = bits.iter().map(|&b| !b).collect();
        prop_assert_eq!(
            longest_balanced_run_in_bits(&bits),
            longest_balanced_run_in_bits(&flipped)
        );
    }

    /// Reversing the sequence keeps the answer
    #[test]
    fn prop_reverse_invariant(bits in prop::collection::vec(any::<bool>(), 0..300)) {
        let reversed: Vec<bool> = bits.iter().rev().copied().collect();
        prop_assert_eq!(
            longest_balanced_run_in_bits(&bits),
            longest_balanced_run_in_bits(&reversed)
        );
    }

    /// Observer sees one step per marker with consistent balances
    #[test]
    fn prop_observer_sees_every_step(bits in prop::collection::vec(any::<bool>(), 0..200)) {
        let mut log = StepLog::new();
        let len = longest_balanced_run_observed(to_markers(&bits), &mut log);
        let steps = log.into_steps();

        prop_assert_eq!(steps.len(), bits.len());
        let mut balance = 0isize;
        let mut longest = 0usize;
        for (i, step) in steps.iter().enumerate() {
            balance += step.marker.weight();
            prop_assert_eq!(step.index, i);
            prop_assert_eq!(step.balance, balance);
            if let StepEvent::Recurred { span, longest: so_far, .. } = step.event {
                longest = longest.max(span);
                prop_assert_eq!(so_far, longest);
            }
        }
        prop_assert_eq!(len, longest);
    }
}
