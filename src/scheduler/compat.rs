//! Compatibility search.
//!
//! For job `i` of a finish-sorted sequence, finds the latest-finishing
//! earlier job that ends no later than job `i` starts. Because finish
//! times are non-decreasing, the qualifying indices `k < i` always form a
//! prefix `0..p`, so the answer is `p - 1` and can be found by bisection.
//!
//! # Complexity
//! - Linear: O(i) per query, O(n²) for a whole table.
//! - Binary: O(log i) per query, O(n log n) for a whole table.

use std::str::FromStr;

use crate::models::Job;

/// Strategy for [`last_compatible`] queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompatibilitySearch {
    /// Backward scan from `i - 1` down to `0`.
    Linear,
    /// Bisection over the finish-sorted prefix.
    #[default]
    Binary,
}

impl CompatibilitySearch {
    /// Runs the query with this strategy.
    #[inline]
    pub fn find(self, sequence: &[Job], i: usize) -> Option<usize> {
        match self {
            Self::Linear => last_compatible_linear(sequence, i),
            Self::Binary => last_compatible_binary(sequence, i),
        }
    }

    /// Strategy name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }
}

impl FromStr for CompatibilitySearch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "binary" => Ok(Self::Binary),
            other => Err(format!("unknown search strategy '{other}', expected linear or binary")),
        }
    }
}

/// Greatest `k < i` with `sequence[k].finish <= sequence[i].start`.
///
/// `sequence` must be sorted by finish time and `i` must index into it.
/// Uses the default strategy.
pub fn last_compatible(sequence: &[Job], i: usize) -> Option<usize> {
    CompatibilitySearch::default().find(sequence, i)
}

/// [`last_compatible`] by backward linear scan. Index 0 is included.
pub fn last_compatible_linear(sequence: &[Job], i: usize) -> Option<usize> {
    let start = sequence[i].start;
    (0..i).rev().find(|&k| sequence[k].finish <= start)
}

/// [`last_compatible`] by binary search over `sequence[..i]`.
pub fn last_compatible_binary(sequence: &[Job], i: usize) -> Option<usize> {
    let start = sequence[i].start;
    let count = sequence[..i].partition_point(|j| j.finish <= start);
    count.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::sort_by_finish;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const BOTH: [CompatibilitySearch; 2] =
        [CompatibilitySearch::Linear, CompatibilitySearch::Binary];

    fn sample_sequence() -> Vec<Job> {
        sort_by_finish(&[
            Job::new(1, 3, 5),
            Job::new(2, 5, 6),
            Job::new(4, 6, 5),
            Job::new(6, 7, 4),
            Job::new(5, 8, 11),
            Job::new(7, 9, 2),
        ])
    }

    #[test]
    fn test_first_index_has_none() {
        let seq = sample_sequence();
        for search in BOTH {
            assert_eq!(search.find(&seq, 0), None);
        }
    }

    #[test]
    fn test_sample_queries() {
        let seq = sample_sequence();
        // (1,3) (2,5) (4,6) (6,7) (5,8) (7,9)
        let expected = [None, None, Some(0), Some(2), Some(1), Some(3)];
        for search in BOTH {
            let got: Vec<Option<usize>> = (0..seq.len()).map(|i| search.find(&seq, i)).collect();
            assert_eq!(got, expected, "strategy {}", search.name());
        }
    }

    #[test]
    fn test_index_zero_is_reachable() {
        // Only the first job fits before the last one.
        let seq = vec![Job::new(1, 2, 1), Job::new(3, 9, 1), Job::new(2, 10, 1)];
        for search in BOTH {
            assert_eq!(search.find(&seq, 2), Some(0));
        }
    }

    #[test]
    fn test_touching_endpoints_are_compatible() {
        let seq = vec![Job::new(1, 4, 1), Job::new(4, 6, 1)];
        for search in BOTH {
            assert_eq!(search.find(&seq, 1), Some(0));
        }
    }

    #[test]
    fn test_equal_finish_prefix() {
        let seq = vec![
            Job::new(1, 3, 1),
            Job::new(2, 3, 1),
            Job::new(1, 3, 1),
            Job::new(3, 5, 1),
        ];
        for search in BOTH {
            assert_eq!(search.find(&seq, 3), Some(2));
        }
    }

    #[test]
    fn test_default_is_binary() {
        assert_eq!(CompatibilitySearch::default(), CompatibilitySearch::Binary);
        let seq = sample_sequence();
        assert_eq!(last_compatible(&seq, 4), Some(1));
    }

    #[test]
    fn test_search_from_str() {
        assert_eq!("linear".parse::<CompatibilitySearch>().unwrap(), CompatibilitySearch::Linear);
        assert_eq!("Binary".parse::<CompatibilitySearch>().unwrap(), CompatibilitySearch::Binary);
        assert!("bisect".parse::<CompatibilitySearch>().is_err());
    }

    #[test]
    fn test_strategies_agree_on_random_sequences() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..200 {
            let n = rng.random_range(1..30);
            let jobs: Vec<Job> = (0..n)
                .map(|_| {
                    let start = rng.random_range(1..50);
                    let len = rng.random_range(1..15);
                    Job::new(start, start + len, rng.random_range(1..20))
                })
                .collect();
            let seq = sort_by_finish(&jobs);
            for i in 0..seq.len() {
                assert_eq!(
                    last_compatible_linear(&seq, i),
                    last_compatible_binary(&seq, i)
                );
            }
        }
    }
}
