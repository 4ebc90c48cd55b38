//! Constraints a feedback row proves about the secret
//!
//! One played row pins down three kinds of facts: letters known to sit at a
//! position, letters known not to sit at a position, and lower/upper bounds
//! on how often a letter occurs. Candidates are tested against all three.

use crate::core::{Feedback, KernelError, LetterCode};
use rustc_hash::{FxHashMap, FxHashSet};

/// What one `(guess, feedback)` row reveals about the secret word
///
/// Derived once per row with [`RowConstraints::from_row`], then applied to
/// any number of candidates via [`RowConstraints::matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowConstraints {
    word_len: usize,
    /// Letter pinned at each position by a right-place result
    known_present: Vec<Option<LetterCode>>,
    /// Letters ruled out at each position
    known_missing: Vec<FxHashSet<LetterCode>>,
    /// Lower bound on occurrences of each guessed letter
    min_counts: FxHashMap<LetterCode, u32>,
    /// Upper bound, recorded only when some occurrence went unlit
    max_counts: FxHashMap<LetterCode, u32>,
}

impl RowConstraints {
    /// Derive the constraints one played row proves
    ///
    /// A right-place letter is pinned at its position. A wrong-place letter
    /// is in the word but ruled out where it was guessed. For each guessed
    /// letter, the number of lit occurrences is a lower bound on its count
    /// in the secret; if any occurrence went unlit, it is also an upper
    /// bound, and the letter is ruled out at every unlit position.
    ///
    /// # Errors
    /// Returns `KernelError::WordLengthMismatch` if `guess` and `feedback`
    /// differ in length, and `KernelError::ZeroWordLength` if both are
    /// empty.
    ///
    /// # Examples
    /// ```
    /// use litsquares::core::compute_feedback;
    /// use litsquares::filtering::RowConstraints;
    ///
    /// let guess = [0, 1, 2];
    /// let secret = [0, 2, 9];
    /// let row = compute_feedback(&guess, &secret).unwrap();
    /// let constraints = RowConstraints::from_row(&guess, &row).unwrap();
    ///
    /// // The true secret always survives its own feedback.
    /// assert!(constraints.matches(&secret));
    /// // A candidate missing the pinned 0 does not.
    /// assert!(!constraints.matches(&[5, 2, 9]));
    /// ```
    pub fn from_row(guess: &[LetterCode], feedback: &[Feedback]) -> Result<Self, KernelError> {
        if guess.len() != feedback.len() {
            return Err(KernelError::WordLengthMismatch {
                expected: guess.len(),
                actual: feedback.len(),
            });
        }
        if guess.is_empty() {
            return Err(KernelError::ZeroWordLength);
        }

        let word_len = guess.len();
        let mut known_present = vec![None; word_len];
        let mut known_missing = vec![FxHashSet::default(); word_len];

        for (i, (&letter, &verdict)) in guess.iter().zip(feedback).enumerate() {
            match verdict {
                Feedback::RightPlace => known_present[i] = Some(letter),
                // In the word, just not here.
                Feedback::WrongPlace => {
                    known_missing[i].insert(letter);
                }
                Feedback::NotPresent => {}
            }
        }

        let mut min_counts = FxHashMap::default();
        let mut max_counts = FxHashMap::default();
        let mut seen = FxHashSet::default();

        for &letter in guess {
            if !seen.insert(letter) {
                continue;
            }

            let mut lit = 0u32;
            let mut unlit = 0u32;
            for (j, &other) in guess.iter().enumerate() {
                if other == letter {
                    if feedback[j].is_lit() {
                        lit += 1;
                    } else {
                        unlit += 1;
                    }
                }
            }

            min_counts.insert(letter, lit);

            if unlit > 0 {
                // An unlit occurrence means every copy beyond the lit ones
                // is absent, which both caps the count and rules the letter
                // out at each unlit position.
                max_counts.insert(letter, lit);
                for (j, &other) in guess.iter().enumerate() {
                    if other == letter && feedback[j] == Feedback::NotPresent {
                        known_missing[j].insert(letter);
                    }
                }
            }
        }

        Ok(Self {
            word_len,
            known_present,
            known_missing,
            min_counts,
            max_counts,
        })
    }

    /// Word length these constraints apply to
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Whether `candidate` is consistent with everything this row proved
    ///
    /// A candidate of the wrong length never matches.
    #[must_use]
    pub fn matches(&self, candidate: &[LetterCode]) -> bool {
        if candidate.len() != self.word_len {
            return false;
        }

        for (i, &code) in candidate.iter().enumerate() {
            if let Some(required) = self.known_present[i]
                && code != required
            {
                return false;
            }
            if self.known_missing[i].contains(&code) {
                return false;
            }
        }

        for (&letter, &min) in &self.min_counts {
            let count = candidate.iter().filter(|&&c| c == letter).count() as u32;
            if count < min {
                return false;
            }
            if let Some(&max) = self.max_counts.get(&letter)
                && count > max
            {
                return false;
            }
        }

        true
    }
}
