//! One solving session over a shrinking candidate pool
//!
//! A [`Session`] tracks every guess/feedback row played so far and the
//! candidates still consistent with all of them. It owns no words beyond its
//! private copies; callers keep doing their own encoding and presentation.

use crate::core::{Feedback, KernelError, LetterCode, WordBlock};
use crate::filtering::{RowConstraints, prune_pool};
use crate::scoring::{Selection, select_best};

/// State of a single game: history plus the surviving candidates
#[derive(Debug, Clone)]
pub struct Session {
    word_len: usize,
    candidates: Vec<LetterCode>,
    guesses: Vec<LetterCode>,
    feedbacks: Vec<Feedback>,
    tries: usize,
}

impl Session {
    /// Start a session over a private copy of `pool`
    ///
    /// # Examples
    /// ```
    /// use litsquares::core::WordBlock;
    /// use litsquares::session::Session;
    ///
    /// let codes = [0, 1, 2, 2, 1, 0, 0, 2, 1];
    /// let pool = WordBlock::new(&codes, 3).unwrap();
    /// let session = Session::new(&pool);
    ///
    /// assert_eq!(session.remaining(), 3);
    /// assert_eq!(session.tries(), 0);
    /// assert!(!session.solved());
    /// ```
    #[must_use]
    pub fn new(pool: &WordBlock<'_>) -> Self {
        Self {
            word_len: pool.word_len(),
            candidates: pool.codes().to_vec(),
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            tries: 0,
        }
    }

    /// Number of letters per word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Number of rows recorded so far
    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// Number of candidates still in play
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len() / self.word_len
    }

    /// The surviving candidates, in original pool order
    #[must_use]
    pub fn candidates(&self) -> WordBlock<'_> {
        WordBlock::from_parts(&self.candidates, self.word_len)
    }

    /// Every guess recorded so far, in play order
    #[must_use]
    pub fn history(&self) -> WordBlock<'_> {
        WordBlock::from_parts(&self.guesses, self.word_len)
    }

    /// The feedback rows recorded so far, flattened in play order
    #[must_use]
    pub fn feedback_history(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Record one played row and prune the pool accordingly
    ///
    /// Returns the number of candidates left after pruning.
    ///
    /// # Errors
    /// Returns `KernelError::WordLengthMismatch` if `guess` or `feedback`
    /// does not match the session's word length.
    ///
    /// # Examples
    /// ```
    /// use litsquares::core::{WordBlock, compute_feedback};
    /// use litsquares::session::Session;
    ///
    /// let codes = [0, 1, 2, 2, 1, 0, 0, 1, 9];
    /// let pool = WordBlock::new(&codes, 3).unwrap();
    /// let mut session = Session::new(&pool);
    ///
    /// let secret = [0, 1, 2];
    /// let guess = [0, 1, 9];
    /// let row = compute_feedback(&guess, &secret).unwrap();
    ///
    /// // [2,1,0] lacks the leading 0, [0,1,9] carries the dark 9.
    /// assert_eq!(session.record(&guess, &row).unwrap(), 1);
    /// ```
    pub fn record(
        &mut self,
        guess: &[LetterCode],
        feedback: &[Feedback],
    ) -> Result<usize, KernelError> {
        if guess.len() != self.word_len {
            return Err(KernelError::WordLengthMismatch {
                expected: self.word_len,
                actual: guess.len(),
            });
        }

        let constraints = RowConstraints::from_row(guess, feedback)?;
        let kept = prune_pool(&self.candidates(), &constraints)?;

        self.candidates = kept;
        self.guesses.extend_from_slice(guess);
        self.feedbacks.extend_from_slice(feedback);
        self.tries += 1;
        Ok(self.remaining())
    }

    /// Whether the most recent row hit every position
    #[must_use]
    pub fn solved(&self) -> bool {
        self.tries > 0
            && self.feedbacks[self.feedbacks.len() - self.word_len..]
                .iter()
                .all(|&f| f == Feedback::RightPlace)
    }

    /// Suggest the candidate expected to light the most squares
    ///
    /// Scores every candidate as a secret against the whole remaining pool
    /// playing the guesses, and returns the winner: the candidate sharing
    /// the most letter-position structure with the rest of the pool.
    ///
    /// # Errors
    /// Returns `KernelError::EmptyCandidatePool` once every candidate has
    /// been pruned away.
    pub fn suggest(&self) -> Result<Selection, KernelError> {
        let pool = self.candidates();
        select_best(&pool, &pool)
    }

    /// Drop every pool entry equal to `word`
    ///
    /// Returns the number of candidates left. Useful when an external
    /// arbiter refuses a word the pool still contains.
    ///
    /// # Errors
    /// Returns `KernelError::WordLengthMismatch` if `word` does not match
    /// the session's word length.
    pub fn remove_candidate(&mut self, word: &[LetterCode]) -> Result<usize, KernelError> {
        if word.len() != self.word_len {
            return Err(KernelError::WordLengthMismatch {
                expected: self.word_len,
                actual: word.len(),
            });
        }

        let mut kept = Vec::with_capacity(self.candidates.len());
        for chunk in self.candidates.chunks_exact(self.word_len) {
            if chunk != word {
                kept.extend_from_slice(chunk);
            }
        }
        self.candidates = kept;
        Ok(self.remaining())
    }
}
