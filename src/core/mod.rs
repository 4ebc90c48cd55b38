//! Core kernel types
//!
//! Encoded words, block views, the feedback comparison, and the shared error
//! type. Everything here is pure value data and side-effect-free functions.

mod error;
mod feedback;
mod word;

pub use error::KernelError;
pub use feedback::{
    Feedback, compute_feedback, compute_feedback_batch, compute_feedback_batch_into,
    compute_feedback_into,
};
pub use word::{LetterCode, WordBlock};

pub(crate) use feedback::fill_feedback;
