//! Interval scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`Job`] | One weighted interval `(start, finish, profit)` |
//! | [`Solution`] | Optimal non-overlapping subset and its total profit |

mod job;
mod solution;

pub use job::Job;
pub use solution::Solution;
