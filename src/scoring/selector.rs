//! Best-secret selection over a candidate pool
//!
//! Scores every secret in a pool against one guess sequence and returns the
//! best. Per-secret scores are independent, so the scan fans out across
//! rayon workers; the reduction keeps the sequential rule that the first
//! pool entry reaching the maximum wins.

use super::score::score_block;
use crate::core::{KernelError, LetterCode, WordBlock};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Winning entry of a candidate-pool scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    /// Index of the winning secret, in pool order
    pub index: usize,
    /// Average lit positions per guess for that secret
    pub score: f64,
}

/// Find the pool secret that scores highest against `guesses`
///
/// Ties go to the earliest pool index, exactly as a sequential
/// strictly-greater-than scan would decide them.
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if the blocks disagree on word
/// length, `KernelError::EmptyCandidatePool` if `secrets` holds no words,
/// and `KernelError::EmptyGuessSequence` if `guesses` holds none.
///
/// # Examples
/// ```
/// use litsquares::core::WordBlock;
/// use litsquares::scoring::select_best;
///
/// let guesses = WordBlock::new(&[0, 1, 2], 3).unwrap();
/// let pool = [9, 9, 9, 0, 1, 9, 0, 1, 2];
/// let secrets = WordBlock::new(&pool, 3).unwrap();
///
/// let best = select_best(&guesses, &secrets).unwrap();
/// assert_eq!(best.index, 2);
/// assert!((best.score - 3.0).abs() < f64::EPSILON);
/// ```
pub fn select_best(
    guesses: &WordBlock<'_>,
    secrets: &WordBlock<'_>,
) -> Result<Selection, KernelError> {
    if secrets.word_len() != guesses.word_len() {
        return Err(KernelError::WordLengthMismatch {
            expected: guesses.word_len(),
            actual: secrets.word_len(),
        });
    }
    if secrets.is_empty() {
        return Err(KernelError::EmptyCandidatePool);
    }
    if guesses.is_empty() {
        return Err(KernelError::EmptyGuessSequence);
    }

    let word_len = guesses.word_len();
    let guess_codes = guesses.codes();

    secrets
        .codes()
        .par_chunks_exact(word_len)
        .enumerate()
        .map(|(index, secret)| Selection {
            index,
            score: score_block(guess_codes, word_len, secret),
        })
        .reduce_with(earlier_max)
        .ok_or(KernelError::EmptyCandidatePool)
}

/// Find the best pool secret and copy its letters into `out`
///
/// The caller-buffer form of [`select_best`]: the winning word's codes land
/// in the first `word_len` slots of `out` and the winning score is returned.
///
/// # Errors
/// Everything [`select_best`] rejects, plus `KernelError::OutputTooSmall`
/// if `out` cannot hold one word. On error `out` is untouched.
pub fn select_best_into(
    guesses: &WordBlock<'_>,
    secrets: &WordBlock<'_>,
    out: &mut [LetterCode],
) -> Result<f64, KernelError> {
    let word_len = secrets.word_len();
    if out.len() < word_len {
        return Err(KernelError::OutputTooSmall {
            required: word_len,
            actual: out.len(),
        });
    }

    let selection = select_best(guesses, secrets)?;
    let winner = secrets
        .get(selection.index)
        .expect("selection index comes from the pool scan");
    out[..word_len].copy_from_slice(winner);
    Ok(selection.score)
}

/// Max-with-earliest-index fold
///
/// Higher score wins; equal scores go to the lower pool index. Associative
/// and commutative, so any parallel split schedule reduces to the same
/// winner as the sequential scan.
fn earlier_max(a: Selection, b: Selection) -> Selection {
    match a.score.total_cmp(&b.score) {
        Ordering::Less => b,
        Ordering::Greater => a,
        Ordering::Equal => {
            if a.index <= b.index {
                a
            } else {
                b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_highest_scoring_secret() {
        let guesses = WordBlock::new(&[0, 1, 2, 3], 4).unwrap();
        let pool = [
            9, 9, 9, 9, // 0 lit
            0, 1, 9, 9, // 2 lit
            0, 1, 2, 3, // 4 lit
            0, 9, 9, 9, // 1 lit
        ];
        let secrets = WordBlock::new(&pool, 4).unwrap();

        let best = select_best(&guesses, &secrets).unwrap();
        assert_eq!(best.index, 2);
        assert!((best.score - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ties_go_to_the_earliest_pool_index() {
        // Indices 2 and 5 both score the maximum; index 2 must win.
        let guesses = WordBlock::new(&[0, 1], 2).unwrap();
        let pool = [
            9, 9, // 0 lit
            0, 9, // 1 lit
            0, 1, // 2 lit
            9, 9, // 0 lit
            2, 9, // 0 lit
            0, 1, // 2 lit
        ];
        let secrets = WordBlock::new(&pool, 2).unwrap();

        let best = select_best(&guesses, &secrets).unwrap();
        assert_eq!(best.index, 2);
        assert!((best.score - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn single_candidate_pool_returns_it() {
        let guesses = WordBlock::new(&[5, 6], 2).unwrap();
        let secrets = WordBlock::new(&[8, 8], 2).unwrap();
        let best = select_best(&guesses, &secrets).unwrap();
        assert_eq!(best.index, 0);
        assert!(best.score.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let guesses = WordBlock::new(&[0, 1], 2).unwrap();
        let codes: [LetterCode; 0] = [];
        let secrets = WordBlock::new(&codes, 2).unwrap();
        assert_eq!(
            select_best(&guesses, &secrets),
            Err(KernelError::EmptyCandidatePool)
        );
    }

    #[test]
    fn empty_guess_sequence_is_rejected() {
        let codes: [LetterCode; 0] = [];
        let guesses = WordBlock::new(&codes, 2).unwrap();
        let secrets = WordBlock::new(&[0, 1], 2).unwrap();
        assert_eq!(
            select_best(&guesses, &secrets),
            Err(KernelError::EmptyGuessSequence)
        );
    }

    #[test]
    fn mismatched_word_lengths_are_rejected() {
        let guesses = WordBlock::new(&[0, 1, 2], 3).unwrap();
        let secrets = WordBlock::new(&[0, 1], 2).unwrap();
        assert_eq!(
            select_best(&guesses, &secrets),
            Err(KernelError::WordLengthMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn into_buffer_receives_the_winner() {
        let guesses = WordBlock::new(&[0, 1, 2], 3).unwrap();
        let pool = [9, 9, 9, 0, 1, 2, 0, 1, 9];
        let secrets = WordBlock::new(&pool, 3).unwrap();

        let mut out = [99; 3];
        let score = select_best_into(&guesses, &secrets, &mut out).unwrap();
        assert_eq!(out, [0, 1, 2]);
        assert!((score - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn into_rejects_short_buffer_untouched() {
        let guesses = WordBlock::new(&[0, 1, 2], 3).unwrap();
        let secrets = WordBlock::new(&[0, 1, 2], 3).unwrap();
        let mut out = [99; 2];
        assert_eq!(
            select_best_into(&guesses, &secrets, &mut out),
            Err(KernelError::OutputTooSmall {
                required: 3,
                actual: 2
            })
        );
        assert_eq!(out, [99, 99]);
    }

    #[test]
    fn parallel_scan_matches_sequential_scan() {
        // A few hundred secrets with many deliberate score collisions.
        let word_len = 3;
        let mut pool: Vec<LetterCode> = Vec::new();
        for i in 0..300u32 {
            pool.extend_from_slice(&[i % 4, (i / 4) % 4, (i / 16) % 4]);
        }
        let guesses = WordBlock::new(&[0, 1, 2, 2, 0, 1], word_len).unwrap();
        let secrets = WordBlock::new(&pool, word_len).unwrap();

        let parallel = select_best(&guesses, &secrets).unwrap();

        let mut best_index = 0usize;
        let mut best_score = -1.0f64;
        for (i, secret) in secrets.words().enumerate() {
            let score = score_block(guesses.codes(), word_len, secret);
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }

        assert_eq!(parallel.index, best_index);
        assert!((parallel.score - best_score).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_selection_is_deterministic() {
        let guesses = WordBlock::new(&[1, 2, 3, 3, 2, 1], 3).unwrap();
        let pool = [1, 2, 3, 3, 2, 1, 2, 3, 1, 1, 3, 2];
        let secrets = WordBlock::new(&pool, 3).unwrap();

        let first = select_best(&guesses, &secrets).unwrap();
        for _ in 0..20 {
            assert_eq!(select_best(&guesses, &secrets).unwrap(), first);
        }
    }
}
