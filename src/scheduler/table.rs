//! DP table construction and reconstruction.
//!
//! # Algorithm
//!
//! Over a finish-sorted sequence of `n` jobs, entry `j` of the table
//! (`0 <= j <= n`) holds the best profit achievable using only the first
//! `j` jobs:
//!
//! ```text
//! OPT(0) = 0
//! OPT(j) = max(profit[j-1] + OPT(p(j-1) + 1), OPT(j-1))
//! ```
//!
//! where `p(i)` is the last job compatible with job `i` (or `-1`).
//! Including wins only when it is strictly better, so equal-profit ties
//! keep the solution built from earlier jobs.
//!
//! Each entry also records the choice made, which lets [`DpTable::reconstruct`]
//! walk back from `n` to `0` and recover the selected jobs.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1-6.2

use tracing::trace;

use super::compat::CompatibilitySearch;
use crate::error::DomainError;
use crate::models::Job;

/// Decision recorded for one prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The last job of the prefix is not part of the best solution.
    Exclude,
    /// The last job of the prefix is selected; the rest of the solution
    /// is the best solution for prefix length `predecessor`.
    Include {
        /// Prefix length to continue reconstruction from.
        predecessor: usize,
    },
}

/// One row of the DP table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpEntry {
    /// Best profit over the prefix.
    pub best_profit: i64,
    /// How `best_profit` was obtained.
    pub choice: Choice,
}

impl DpEntry {
    const EMPTY: Self = Self {
        best_profit: 0,
        choice: Choice::Exclude,
    };
}

/// Best-profit table over every prefix of a finish-sorted job sequence.
///
/// Built once per scheduler invocation and dropped after reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    entries: Vec<DpEntry>,
}

impl DpTable {
    /// Fills the table for `sequence`.
    ///
    /// `sequence` must be sorted by finish time. Returns
    /// [`DomainError::ProfitOverflow`] if a prefix profit exceeds `i64`.
    pub fn build(sequence: &[Job], search: CompatibilitySearch) -> Result<Self, DomainError> {
        let n = sequence.len();
        let mut entries = Vec::with_capacity(n + 1);
        entries.push(DpEntry::EMPTY);

        for j in 1..=n {
            let job = &sequence[j - 1];
            let predecessor = search.find(sequence, j - 1).map_or(0, |k| k + 1);

            let include = job
                .profit
                .checked_add(entries[predecessor].best_profit)
                .ok_or(DomainError::ProfitOverflow)?;
            let exclude = entries[j - 1].best_profit;

            let entry = if include > exclude {
                DpEntry {
                    best_profit: include,
                    choice: Choice::Include { predecessor },
                }
            } else {
                DpEntry {
                    best_profit: exclude,
                    choice: Choice::Exclude,
                }
            };
            trace!(j, %job, include, exclude, ?entry.choice, "dp step");
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Best profit over the whole sequence.
    pub fn max_profit(&self) -> i64 {
        self.entries.last().map_or(0, |e| e.best_profit)
    }

    /// Number of jobs the table was built over.
    pub fn job_count(&self) -> usize {
        self.entries.len() - 1
    }

    /// All entries, indexed by prefix length.
    pub fn entries(&self) -> &[DpEntry] {
        &self.entries
    }

    /// Entry for prefix length `j`.
    pub fn entry(&self, j: usize) -> Option<&DpEntry> {
        self.entries.get(j)
    }

    /// Recovers the selected jobs, ascending by finish time.
    ///
    /// `sequence` must be the one the table was built from.
    pub fn reconstruct(&self, sequence: &[Job]) -> Vec<Job> {
        debug_assert_eq!(sequence.len(), self.job_count());

        let mut selected = Vec::new();
        let mut j = self.job_count();
        while j > 0 {
            match self.entries[j].choice {
                Choice::Include { predecessor } => {
                    selected.push(sequence[j - 1]);
                    j = predecessor;
                }
                Choice::Exclude => j -= 1,
            }
        }
        selected.reverse();
        selected
    }
}
