//! Candidate-pool pruning

use super::constraints::RowConstraints;
use crate::core::{KernelError, LetterCode, WordBlock};

/// Keep the pool entries consistent with `constraints`, in pool order
///
/// Returns the survivors as a flattened row-major buffer, ready to wrap in a
/// fresh [`WordBlock`].
///
/// # Errors
/// Returns `KernelError::WordLengthMismatch` if the pool and constraints
/// disagree on word length.
///
/// # Examples
/// ```
/// use litsquares::core::{WordBlock, compute_feedback};
/// use litsquares::filtering::{RowConstraints, prune_pool};
///
/// let pool_codes = [0, 1, 2, 9, 1, 2, 0, 5, 5];
/// let pool = WordBlock::new(&pool_codes, 3).unwrap();
///
/// let guess = [0, 8, 8];
/// let row = compute_feedback(&guess, &[0, 1, 2]).unwrap();
/// let constraints = RowConstraints::from_row(&guess, &row).unwrap();
///
/// // Only candidates starting with 0 and free of 8s survive.
/// let kept = prune_pool(&pool, &constraints).unwrap();
/// assert_eq!(kept, vec![0, 1, 2, 0, 5, 5]);
/// ```
pub fn prune_pool(
    pool: &WordBlock<'_>,
    constraints: &RowConstraints,
) -> Result<Vec<LetterCode>, KernelError> {
    if pool.word_len() != constraints.word_len() {
        return Err(KernelError::WordLengthMismatch {
            expected: constraints.word_len(),
            actual: pool.word_len(),
        });
    }

    let mut kept = Vec::with_capacity(pool.codes().len());
    for word in pool.words() {
        if constraints.matches(word) {
            kept.extend_from_slice(word);
        }
    }
    Ok(kept)
}
