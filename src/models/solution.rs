//! Solution model.
//!
//! The result of one scheduler invocation: the selected jobs in
//! finish-ascending order and the profit they earn together.

use serde::{Deserialize, Serialize};

use super::Job;

/// A maximum-profit set of pairwise compatible jobs.
///
/// Owns copies of the selected jobs; nothing is shared with the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Selected jobs, ascending by finish time.
    pub optimal_set: Vec<Job>,
    /// Total profit of `optimal_set`.
    pub max_profit: i64,
}

impl Solution {
    /// Creates a solution from selected jobs and their profit.
    pub fn new(optimal_set: Vec<Job>, max_profit: i64) -> Self {
        Self {
            optimal_set,
            max_profit,
        }
    }

    /// Sum of profits over the selected jobs.
    pub fn total_profit(&self) -> i64 {
        self.optimal_set.iter().map(|j| j.profit).sum()
    }

    /// Whether no two selected jobs overlap.
    pub fn is_pairwise_compatible(&self) -> bool {
        self.optimal_set.iter().enumerate().all(|(i, a)| {
            self.optimal_set[i + 1..]
                .iter()
                .all(|b| a.is_compatible_with(b))
        })
    }

    /// Number of selected jobs.
    pub fn len(&self) -> usize {
        self.optimal_set.len()
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.optimal_set.is_empty()
    }

    /// Iterates over the selected jobs.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.optimal_set.iter()
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
