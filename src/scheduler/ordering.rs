//! Finish-time ordering.
//!
//! The DP recurrence requires jobs in non-decreasing finish order. The
//! sort is stable, so jobs that finish together keep their input order.
//! That order decides which of several equal-profit optima is reported.

use crate::models::Job;

/// Returns a copy of `jobs` sorted by ascending finish time (stable).
pub fn sort_by_finish(jobs: &[Job]) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by_key(|j| j.finish);
    sorted
}

/// Whether `jobs` is in non-decreasing finish order.
pub fn is_sorted_by_finish(jobs: &[Job]) -> bool {
    jobs.windows(2).all(|w| w[0].finish <= w[1].finish)
}
