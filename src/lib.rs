//! Lit Squares
//!
//! The computational kernel of a Wordle-style solver: per-letter feedback
//! with exact duplicate handling, lit-square scoring of guess sequences, and
//! best-secret selection over candidate pools.
//!
//! Words arrive already encoded as integer letter codes, packed in
//! contiguous row-major blocks; encoding, word lists, and presentation stay
//! with the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use litsquares::core::{WordBlock, compute_feedback};
//! use litsquares::scoring::select_best;
//!
//! // Compare one guess against one secret.
//! let row = compute_feedback(&[0, 1, 2], &[0, 2, 9]).unwrap();
//! println!("feedback: {row:?}");
//!
//! // Pick the candidate that lights the most squares.
//! let guesses = WordBlock::new(&[0, 1, 2], 3).unwrap();
//! let pool = WordBlock::new(&[9, 9, 9, 0, 2, 9, 0, 1, 2], 3).unwrap();
//! let best = select_best(&guesses, &pool).unwrap();
//! assert_eq!(best.index, 2);
//! ```

// Core domain types and the feedback comparison
pub mod core;

// Constraint derivation and candidate pruning
pub mod filtering;

// Guess-sequence scoring and pool selection
pub mod scoring;

// Game-session bookkeeping on top of the kernel
pub mod session;
