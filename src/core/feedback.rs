//! Per-letter feedback comparison
//!
//! Computes the familiar right-place / wrong-place / not-present verdict for
//! each position of a guess against a secret, including the subtle
//! duplicate-letter rule: a letter can only be marked wrong-place while the
//! secret has unclaimed occurrences of it left, right-place matches claim
//! first, and among competing guess positions the leftmost wins.

use super::word::{LetterCode, WordBlock, letter_counts};
use super::KernelError;

/// Outcome for one letter position of a guess compared against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// The guessed letter matches the secret at this position
    RightPlace,
    /// The letter occurs elsewhere in the secret, with capacity left to claim
    WrongPlace,
    /// No unclaimed occurrence of the letter remains in the secret
    NotPresent,
}

impl Feedback {
    /// Whether this outcome reveals that the letter occurs in the secret
    ///
    /// Lit positions (right place or wrong place) are the ones that carry
    /// information; scoring counts exactly these.
    #[inline]
    #[must_use]
    pub const fn is_lit(self) -> bool {
        matches!(self, Self::RightPlace | Self::WrongPlace)
    }
}

/// Compare `guess` against `secret`, writing one verdict per position into `out`
///
/// This is the buffer-filling primitive; [`compute_feedback`] is the
/// allocating convenience wrapper. Only the first `guess.len()` entries of
/// `out` are written.
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if the words disagree on
/// length, and `KernelError::OutputTooSmall` if `out` cannot hold one
/// verdict per position. On error `out` is untouched.
///
/// # Examples
/// ```
/// use litsquares::core::{Feedback, compute_feedback_into};
///
/// let guess = [2, 17, 0, 13, 4];
/// let secret = [18, 11, 0, 19, 4];
/// let mut row = [Feedback::NotPresent; 5];
///
/// compute_feedback_into(&guess, &secret, &mut row).unwrap();
/// assert_eq!(row[2], Feedback::RightPlace);
/// assert_eq!(row[4], Feedback::RightPlace);
/// assert_eq!(row[0], Feedback::NotPresent);
/// ```
pub fn compute_feedback_into(
    guess: &[LetterCode],
    secret: &[LetterCode],
    out: &mut [Feedback],
) -> Result<(), KernelError> {
    if guess.len() != secret.len() {
        return Err(KernelError::WordLengthMismatch {
            expected: guess.len(),
            actual: secret.len(),
        });
    }
    if out.len() < guess.len() {
        return Err(KernelError::OutputTooSmall {
            required: guess.len(),
            actual: out.len(),
        });
    }

    fill_feedback(guess, secret, &mut out[..guess.len()]);
    Ok(())
}

/// Compare `guess` against `secret`, returning a freshly allocated row
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if the words disagree on length.
///
/// # Examples
/// ```
/// use litsquares::core::{Feedback, compute_feedback};
///
/// // Secret has two 0s, the guess four; only the two right-place matches
/// // can claim them, so the trailing pair goes dark.
/// let row = compute_feedback(&[0, 0, 0, 0], &[0, 0, 1, 1]).unwrap();
/// assert_eq!(
///     row,
///     vec![
///         Feedback::RightPlace,
///         Feedback::RightPlace,
///         Feedback::NotPresent,
///         Feedback::NotPresent,
///     ]
/// );
/// ```
pub fn compute_feedback(
    guess: &[LetterCode],
    secret: &[LetterCode],
) -> Result<Vec<Feedback>, KernelError> {
    if guess.len() != secret.len() {
        return Err(KernelError::WordLengthMismatch {
            expected: guess.len(),
            actual: secret.len(),
        });
    }

    let mut out = vec![Feedback::NotPresent; guess.len()];
    fill_feedback(guess, secret, &mut out);
    Ok(out)
}

/// Compare every guess in `guesses` against one secret
///
/// Rows land in consecutive `word_len` chunks of `out`, one per guess, in
/// block order.
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if `secret` does not match the
/// block's word length, and `KernelError::OutputTooSmall` if `out` cannot
/// hold every row. On error `out` is untouched.
pub fn compute_feedback_batch_into(
    guesses: &WordBlock<'_>,
    secret: &[LetterCode],
    out: &mut [Feedback],
) -> Result<(), KernelError> {
    let word_len = guesses.word_len();
    if secret.len() != word_len {
        return Err(KernelError::WordLengthMismatch {
            expected: word_len,
            actual: secret.len(),
        });
    }
    let required = guesses.len() * word_len;
    if out.len() < required {
        return Err(KernelError::OutputTooSmall {
            required,
            actual: out.len(),
        });
    }

    for (guess, row) in guesses.words().zip(out.chunks_exact_mut(word_len)) {
        fill_feedback(guess, secret, row);
    }
    Ok(())
}

/// Compare every guess in `guesses` against one secret, allocating the rows
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if `secret` does not match the
/// block's word length.
///
/// # Examples
/// ```
/// use litsquares::core::{Feedback, WordBlock, compute_feedback_batch};
///
/// let guesses = WordBlock::new(&[0, 1, 1, 0], 2).unwrap();
/// let rows = compute_feedback_batch(&guesses, &[0, 1]).unwrap();
///
/// assert_eq!(&rows[..2], &[Feedback::RightPlace, Feedback::RightPlace]);
/// assert_eq!(&rows[2..], &[Feedback::WrongPlace, Feedback::WrongPlace]);
/// ```
pub fn compute_feedback_batch(
    guesses: &WordBlock<'_>,
    secret: &[LetterCode],
) -> Result<Vec<Feedback>, KernelError> {
    let mut out = vec![Feedback::NotPresent; guesses.len() * guesses.word_len()];
    compute_feedback_batch_into(guesses, secret, &mut out)?;
    Ok(out)
}

/// Fill one feedback row; lengths already agree
///
/// # Algorithm
/// 1. First pass: mark right-place matches and debit each one from the
///    secret's per-letter availability pool.
/// 2. Second pass, left to right: grant wrong-place while the letter still
///    has availability, debiting per grant, so earlier guess positions claim
///    capacity ahead of later duplicates.
pub(crate) fn fill_feedback(guess: &[LetterCode], secret: &[LetterCode], out: &mut [Feedback]) {
    let mut available = letter_counts(secret);

    for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            out[i] = Feedback::RightPlace;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        } else {
            out[i] = Feedback::NotPresent;
        }
    }

    for (i, &g) in guess.iter().enumerate() {
        if out[i] == Feedback::RightPlace {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            out[i] = Feedback::WrongPlace;
            *count -= 1;
        }
    }
}
