//! Error types for interval scheduling.

use thiserror::Error;

use crate::models::Job;

/// A job violates the interval domain, or the scheduler cannot represent
/// the resulting profit.
///
/// Produced by [`Job::try_new`], the validation pass, and the scheduler's
/// precondition check. The scheduler never returns a partial result
/// alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Start time is zero or negative.
    #[error("job {job} has a non-positive start time")]
    NonPositiveStart {
        /// Offending job.
        job: Job,
    },

    /// Finish time is zero or negative.
    #[error("job {job} has a non-positive finish time")]
    NonPositiveFinish {
        /// Offending job.
        job: Job,
    },

    /// Profit is zero or negative.
    #[error("job {job} has a non-positive profit")]
    NonPositiveProfit {
        /// Offending job.
        job: Job,
    },

    /// Start is not strictly before finish.
    #[error("job {job} does not start before it finishes")]
    EmptyInterval {
        /// Offending job.
        job: Job,
    },

    /// Accumulated profit does not fit in an `i64`.
    #[error("accumulated profit overflows i64")]
    ProfitOverflow,
}
