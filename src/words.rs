//! Balanced runs over bit-packed sequences.
//!
//! Bits are stored in 64-bit words, LSB first: bit `i` lives at position
//! `i % 64` of word `i / 64`. A set bit is a one-kind marker.

use crate::finder::BalancedRunFinder;
use crate::marker::Marker;

/// Iterator over the first `len` bits of a word slice, as markers.
#[derive(Clone, Debug)]
pub struct WordBits<'a> {
    words: &'a [u64],
    pos: usize,
    len: usize,
}

impl<'a> WordBits<'a> {
    /// Iterate over bits `[0, len)` of `words`.
    ///
    /// # Panics
    ///
    /// Panics if `len > words.len() * 64`.
    pub fn new(words: &'a [u64], len: usize) -> Self {
        assert!(
            len <= words.len().saturating_mul(64),
            "len {} exceeds capacity {}",
            len,
            words.len().saturating_mul(64)
        );
        Self {
            words,
            pos: 0,
            len,
        }
    }
}

impl Iterator for WordBits<'_> {
    type Item = Marker;

    #[inline]
    fn next(&mut self) -> Option<Marker> {
        if self.pos >= self.len {
            return None;
        }
        let bit = (self.words[self.pos / 64] >> (self.pos % 64)) & 1 == 1;
        self.pos += 1;
        Some(Marker::from(bit))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for WordBits<'_> {}

/// Longest balanced run over the first `len` bits of `words`.
///
/// Bits beyond `len` are ignored.
///
/// # Panics
///
/// Panics if `len > words.len() * 64`.
///
/// # Example
///
/// ```
/// use balanced_run::longest_balanced_run_in_words;
///
/// // bits (LSB first): 1 1 0 0 1
/// assert_eq!(longest_balanced_run_in_words(&[0b1_0011], 5), 4);
/// ```
pub fn longest_balanced_run_in_words(words: &[u64], len: usize) -> usize {
    let mut finder = BalancedRunFinder::with_capacity(len);
    finder.extend(WordBits::new(words, len));
    finder.longest()
}
