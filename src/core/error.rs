//! Kernel error type
//!
//! Every operation validates its inputs before computing; on error no output
//! buffer has been written.

use std::fmt;

/// Error returned when a kernel operation rejects its inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A word length of zero was supplied
    ZeroWordLength,
    /// A code buffer's length is not a whole number of words
    RaggedBlock { codes: usize, word_len: usize },
    /// Two words, or a word and a block, disagree on length
    WordLengthMismatch { expected: usize, actual: usize },
    /// A caller-allocated output buffer is smaller than required
    OutputTooSmall { required: usize, actual: usize },
    /// A scoring call received zero guesses
    EmptyGuessSequence,
    /// A selection call received zero candidate secrets
    EmptyCandidatePool,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWordLength => write!(f, "Word length must be at least 1"),
            Self::RaggedBlock { codes, word_len } => {
                write!(
                    f,
                    "Code buffer of {codes} entries is not a whole number of {word_len}-letter words"
                )
            }
            Self::WordLengthMismatch { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::OutputTooSmall { required, actual } => {
                write!(
                    f,
                    "Output buffer must hold at least {required} entries, got {actual}"
                )
            }
            Self::EmptyGuessSequence => write!(f, "At least one guess is required"),
            Self::EmptyCandidatePool => write!(f, "Candidate pool must not be empty"),
        }
    }
}

impl std::error::Error for KernelError {}
