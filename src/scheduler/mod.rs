//! Weighted interval scheduler.
//!
//! Selects a maximum-profit set of pairwise non-overlapping jobs on a
//! single machine.
//!
//! # Algorithm
//!
//! 1. Sort jobs by ascending finish time (stable).
//! 2. For each job, find the last earlier job that finishes by its start.
//! 3. Fill a best-profit table over every prefix, then walk it backward
//!    to recover the selected jobs.
//!
//! # Complexity
//! O(n log n) with [`CompatibilitySearch::Binary`], O(n²) with
//! [`CompatibilitySearch::Linear`].
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

mod compat;
mod ordering;
mod table;

pub use compat::{
    last_compatible, last_compatible_binary, last_compatible_linear, CompatibilitySearch,
};
pub use ordering::{is_sorted_by_finish, sort_by_finish};
pub use table::{Choice, DpEntry, DpTable};

use tracing::debug;

use crate::error::DomainError;
use crate::models::{Job, Solution};
use crate::validation;

/// Weighted interval scheduler.
///
/// Stateless apart from its configuration; every call builds and drops
/// its own table, so one instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use u_interval::models::Job;
/// use u_interval::scheduler::{CompatibilitySearch, IntervalScheduler};
///
/// let jobs = vec![
///     Job::new(1, 2, 50),
///     Job::new(3, 5, 20),
///     Job::new(6, 19, 100),
///     Job::new(2, 10, 200),
/// ];
///
/// let scheduler = IntervalScheduler::new().with_search(CompatibilitySearch::Linear);
/// let solution = scheduler.schedule(&jobs).unwrap();
/// assert_eq!(solution.max_profit, 250);
/// assert_eq!(solution.optimal_set, vec![Job::new(1, 2, 50), Job::new(2, 10, 200)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalScheduler {
    search: CompatibilitySearch,
    validate: bool,
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalScheduler {
    /// Creates a scheduler with binary compatibility search and input
    /// validation enabled.
    pub fn new() -> Self {
        Self {
            search: CompatibilitySearch::default(),
            validate: true,
        }
    }

    /// Sets the compatibility search strategy.
    pub fn with_search(mut self, search: CompatibilitySearch) -> Self {
        self.search = search;
        self
    }

    /// Enables or disables the precondition check.
    ///
    /// With validation off, jobs violating `0 < start < finish`,
    /// `profit > 0` produce an unspecified (but memory-safe) result.
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Configured search strategy.
    pub fn search(&self) -> CompatibilitySearch {
        self.search
    }

    /// Whether the precondition check runs.
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Computes a maximum-profit set of non-overlapping jobs.
    ///
    /// The returned set is ordered by ascending finish time and its total
    /// profit equals `max_profit`. When several sets reach the same
    /// profit, the one assembled from earlier-finishing jobs is returned.
    ///
    /// # Errors
    /// [`DomainError`] if validation is enabled and a job is invalid, or
    /// if the total profit overflows `i64`.
    pub fn schedule(&self, jobs: &[Job]) -> Result<Solution, DomainError> {
        if self.validate {
            validation::validate_jobs(jobs)?;
        }

        let sequence = sort_by_finish(jobs);
        let table = DpTable::build(&sequence, self.search)?;
        let optimal_set = table.reconstruct(&sequence);
        let max_profit = table.max_profit();

        debug!(
            jobs = jobs.len(),
            selected = optimal_set.len(),
            max_profit,
            search = self.search.name(),
            "interval schedule computed"
        );

        Ok(Solution::new(optimal_set, max_profit))
    }
}

/// Computes a maximum-profit set of non-overlapping jobs with the default
/// scheduler configuration.
pub fn schedule(jobs: &[Job]) -> Result<Solution, DomainError> {
    IntervalScheduler::new().schedule(jobs)
}
