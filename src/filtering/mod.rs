//! Feedback-derived constraints and candidate pruning

mod constraints;
mod prune;

pub use constraints::RowConstraints;
pub use prune::prune_pool;
