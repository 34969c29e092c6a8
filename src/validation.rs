//! Input validation for interval scheduling.
//!
//! Checks every candidate job against the domain invariant
//! `0 < start < finish`, `profit > 0` before it reaches the scheduler.
//! Two modes:
//! - [`validate_jobs`]: fail fast on the first violation.
//! - [`partition`]: keep the valid jobs and report every rejected one,
//!   including lines the input parser could not read, so a caller can
//!   drop them and tell the user about them.

use thiserror::Error;
use tracing::warn;

use crate::error::DomainError;
use crate::input::{RawRecord, RecordError};
use crate::models::Job;

/// Why a record was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The job violates the domain invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The record could not be parsed.
    #[error(transparent)]
    Malformed(#[from] RecordError),
}

/// A record that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position among the input records (0-based).
    pub index: usize,
    /// The rejected record.
    pub record: RawRecord,
    /// Why it was rejected.
    pub reason: Rejection,
}

/// Outcome of [`partition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Valid jobs, in input order.
    pub accepted: Vec<Job>,
    /// Invalid jobs, in input order.
    pub rejected: Vec<RejectedRecord>,
}

impl ValidationReport {
    /// Whether any record was rejected.
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// Checks a single job.
pub fn validate_job(job: &Job) -> Result<(), DomainError> {
    job.check()
}

/// Checks all jobs, returning the first violation found.
pub fn validate_jobs(jobs: &[Job]) -> Result<(), DomainError> {
    jobs.iter().try_for_each(validate_job)
}

/// Splits records into valid jobs and rejections, collecting every
/// violation.
///
/// Accepts plain [`Job`]s or parsed [`RawRecord`]s; malformed records are
/// always rejected.
pub fn partition<I, R>(records: I) -> ValidationReport
where
    I: IntoIterator<Item = R>,
    R: Into<RawRecord>,
{
    let mut report = ValidationReport::default();

    for (index, record) in records.into_iter().map(Into::into).enumerate() {
        let reason = match &record {
            RawRecord::Job(job) => match validate_job(job) {
                Ok(()) => {
                    report.accepted.push(*job);
                    continue;
                }
                Err(error) => Rejection::Domain(error),
            },
            RawRecord::Malformed(m) => Rejection::Malformed(m.error.clone()),
        };
        warn!(index, %record, %reason, "rejecting job record");
        report.rejected.push(RejectedRecord {
            index,
            record,
            reason,
        });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1, 4, 3),
            Job::new(3, 5, 2),
            Job::new(0, 6, 9),
            Job::new(4, 7, 7),
            Job::new(3, 8, 4),
            Job::new(5, 9, 4),
            Job::new(6, 10, 10),
        ]
    }

    #[test]
    fn test_valid_input() {
        let jobs = vec![Job::new(1, 3, 5), Job::new(2, 5, 6)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(validate_jobs(&[]).is_ok());
        let report = partition(Vec::<Job>::new());
        assert!(report.accepted.is_empty());
        assert!(!report.has_rejections());
    }

    #[test]
    fn test_fail_fast_returns_first() {
        let jobs = vec![Job::new(1, 2, 3), Job::new(4, 4, 1), Job::new(0, 1, 1)];
        assert_eq!(
            validate_jobs(&jobs),
            Err(DomainError::EmptyInterval {
                job: Job::new(4, 4, 1)
            })
        );
    }

    #[test]
    fn test_partition_drops_zero_start() {
        let report = partition(sample_jobs());

        assert_eq!(report.accepted.len(), 6);
        assert_eq!(report.rejected.len(), 1);
        let rejected = &report.rejected[0];
        assert_eq!(rejected.index, 2);
        assert_eq!(rejected.record, RawRecord::Job(Job::new(0, 6, 9)));
        assert!(matches!(
            rejected.reason,
            Rejection::Domain(DomainError::NonPositiveStart { .. })
        ));
    }

    #[test]
    fn test_partition_preserves_order() {
        let report = partition(sample_jobs());
        assert_eq!(report.accepted[0], Job::new(1, 4, 3));
        assert_eq!(report.accepted[2], Job::new(4, 7, 7));
        assert_eq!(report.accepted[5], Job::new(6, 10, 10));
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![
            Job::new(-1, 2, 3),
            Job::new(1, 2, -3),
            Job::new(9, 2, 3),
            Job::new(1, 2, 3),
        ];
        let report = partition(jobs);

        assert_eq!(report.accepted, vec![Job::new(1, 2, 3)]);
        let indices: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_malformed_lines_are_rejected() {
        let records = crate::input::parse_text("1 3 5\n2 x 6\n4 6 5");
        let report = partition(records);

        assert_eq!(report.accepted, vec![Job::new(1, 3, 5), Job::new(4, 6, 5)]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].index, 1);
        assert!(matches!(
            report.rejected[0].reason,
            Rejection::Malformed(RecordError::InvalidToken { position: 2, .. })
        ));
        assert_eq!(report.rejected[0].record.to_string(), "2 x 6");
    }
}
