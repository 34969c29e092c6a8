//! Job (weighted interval) model.
//!
//! A job occupies the half-open interval `[start, finish)` on a single
//! machine and earns `profit` when selected. Two jobs are compatible when
//! one finishes at or before the other starts, so touching endpoints do
//! not conflict.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A weighted interval to be scheduled.
///
/// Jobs carry no identity beyond their field values: two jobs with equal
/// fields are interchangeable, and both may appear in the same input.
///
/// # Time Representation
/// Times are abstract positive integers. The consumer decides the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Start time (inclusive).
    pub start: i64,
    /// Finish time (exclusive).
    pub finish: i64,
    /// Profit earned when the job is selected.
    pub profit: i64,
}

impl Job {
    /// Creates a job without checking the domain invariant.
    ///
    /// Use [`Job::try_new`] or the [`validation`](crate::validation) pass
    /// for untrusted input.
    pub const fn new(start: i64, finish: i64, profit: i64) -> Self {
        Self {
            start,
            finish,
            profit,
        }
    }

    /// Creates a job, rejecting values outside `0 < start < finish`,
    /// `profit > 0`.
    pub fn try_new(start: i64, finish: i64, profit: i64) -> Result<Self, DomainError> {
        let job = Self::new(start, finish, profit);
        job.check()?;
        Ok(job)
    }

    /// Checks the domain invariant.
    ///
    /// Positivity is checked before ordering, so `(0, 0, 5)` reports a
    /// non-positive start rather than an empty interval.
    pub fn check(&self) -> Result<(), DomainError> {
        let job = *self;
        if self.start <= 0 {
            return Err(DomainError::NonPositiveStart { job });
        }
        if self.finish <= 0 {
            return Err(DomainError::NonPositiveFinish { job });
        }
        if self.profit <= 0 {
            return Err(DomainError::NonPositiveProfit { job });
        }
        if self.start >= self.finish {
            return Err(DomainError::EmptyInterval { job });
        }
        Ok(())
    }

    /// Whether the job satisfies the domain invariant.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Length of the interval (`finish - start`).
    ///
    /// Saturates at the `i64` bounds for unchecked jobs whose span does
    /// not fit.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.finish.saturating_sub(self.start)
    }

    /// Whether the two jobs can both be selected.
    ///
    /// Symmetric. A job that ends exactly when the other starts is
    /// compatible with it.
    #[inline]
    pub fn is_compatible_with(&self, other: &Job) -> bool {
        self.finish <= other.start || other.finish <= self.start
    }

    /// Whether the two jobs share any instant.
    #[inline]
    pub fn overlaps(&self, other: &Job) -> bool {
        !self.is_compatible_with(other)
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.start, self.finish, self.profit)
    }
}

impl From<(i64, i64, i64)> for Job {
    fn from((start, finish, profit): (i64, i64, i64)) -> Self {
        Self::new(start, finish, profit)
    }
}
