//! Lit-square scoring of a guess sequence
//!
//! A guess position that comes back lit (right place or wrong place) told
//! the player something about the secret. The score of a guess sequence
//! against one secret is the average number of lit positions per guess.

use crate::core::{Feedback, KernelError, LetterCode, WordBlock, fill_feedback};

/// Average lit positions per guess for `guesses` played against `secret`
///
/// The denominator is the number of guesses only, so the result ranges over
/// `[0, word_len]` rather than `[0, 1]`; callers wanting a fraction divide
/// by the word length themselves.
///
/// # Errors
/// Returns `KernelError::EmptyGuessSequence` if the block holds no guesses
/// (the average would divide by zero), and
/// `KernelError::WordLengthMismatch` if `secret` does not match the block's
/// word length.
///
/// # Examples
/// ```
/// use litsquares::core::WordBlock;
/// use litsquares::scoring::score_guesses;
///
/// // One guess hits every position, the other hits none.
/// let codes = [0, 1, 2, 7, 8, 9];
/// let guesses = WordBlock::new(&codes, 3).unwrap();
///
/// let score = score_guesses(&guesses, &[0, 1, 2]).unwrap();
/// assert!((score - 1.5).abs() < f64::EPSILON);
/// ```
pub fn score_guesses(guesses: &WordBlock<'_>, secret: &[LetterCode]) -> Result<f64, KernelError> {
    if guesses.is_empty() {
        return Err(KernelError::EmptyGuessSequence);
    }
    if secret.len() != guesses.word_len() {
        return Err(KernelError::WordLengthMismatch {
            expected: guesses.word_len(),
            actual: secret.len(),
        });
    }

    Ok(score_block(guesses.codes(), guesses.word_len(), secret))
}

/// Score one secret against a flat guess buffer; lengths already validated
///
/// Shared with the pool selector so the parallel scan skips per-secret
/// revalidation.
pub(crate) fn score_block(
    guess_codes: &[LetterCode],
    word_len: usize,
    secret: &[LetterCode],
) -> f64 {
    let n_guesses = guess_codes.len() / word_len;
    let mut row = vec![Feedback::NotPresent; word_len];
    let mut lit = 0usize;

    for guess in guess_codes.chunks_exact(word_len) {
        fill_feedback(guess, secret, &mut row);
        lit += row.iter().filter(|f| f.is_lit()).count();
    }

    lit as f64 / n_guesses as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_guess_scores_word_len() {
        let codes = [3, 1, 4, 1, 5];
        let guesses = WordBlock::new(&codes, 5).unwrap();
        let score = score_guesses(&guesses, &[3, 1, 4, 1, 5]).unwrap();
        assert!((score - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn disjoint_letters_score_zero() {
        let codes = [0, 1, 2, 3, 4, 5];
        let guesses = WordBlock::new(&codes, 3).unwrap();
        let score = score_guesses(&guesses, &[9, 9, 9]).unwrap();
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn denominator_is_guess_count_not_positions() {
        // Three guesses, 2 + 0 + 1 lit positions: average 1.0, even though
        // only a third of all positions lit up.
        let codes = [0, 1, 7, 8, 0, 9];
        let guesses = WordBlock::new(&codes, 2).unwrap();
        let secret = [0, 1];

        // Guess [0,9]: position 0 right place, 9 absent: one lit.
        let score = score_guesses(&guesses, &secret).unwrap();
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrong_place_positions_count_as_lit() {
        let codes = [1, 0];
        let guesses = WordBlock::new(&codes, 2).unwrap();
        let score = score_guesses(&guesses, &[0, 1]).unwrap();
        assert!((score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn score_stays_in_range() {
        let codes = [0, 0, 2, 2, 4, 4, 6, 6, 0, 2];
        let guesses = WordBlock::new(&codes, 2).unwrap();
        for secret in [[0u32, 0], [9, 9], [0, 2], [2, 0]] {
            let score = score_guesses(&guesses, &secret).unwrap();
            assert!((0.0..=2.0).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn empty_guess_sequence_is_rejected() {
        let codes: [LetterCode; 0] = [];
        let guesses = WordBlock::new(&codes, 5).unwrap();
        assert_eq!(
            score_guesses(&guesses, &[0, 1, 2, 3, 4]),
            Err(KernelError::EmptyGuessSequence)
        );
    }

    #[test]
    fn mismatched_secret_is_rejected() {
        let codes = [0, 1, 2];
        let guesses = WordBlock::new(&codes, 3).unwrap();
        assert_eq!(
            score_guesses(&guesses, &[0, 1]),
            Err(KernelError::WordLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn duplicate_heavy_guess_scores_capped_capacity() {
        // Secret [0,0,1,1], guess [0,0,0,0]: two right-place claims, the
        // rest dark, so exactly two lit positions.
        let codes = [0, 0, 0, 0];
        let guesses = WordBlock::new(&codes, 4).unwrap();
        let score = score_guesses(&guesses, &[0, 0, 1, 1]).unwrap();
        assert!((score - 2.0).abs() < f64::EPSILON);
    }
}
