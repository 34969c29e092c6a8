//! Weighted interval scheduling for the U-Engine ecosystem.
//!
//! Given candidate jobs `(start, finish, profit)` on a single machine,
//! selects a subset of pairwise non-overlapping jobs with maximum total
//! profit, using bottom-up dynamic programming over finish-sorted prefixes.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Solution`
//! - **`scheduler`**: Ordering, compatibility search, DP table and
//!   reconstruction, behind `IntervalScheduler` / `schedule`
//! - **`validation`**: Domain checks (positivity, `start < finish`)
//! - **`input`**: Text and JSON job record parsing
//! - **`report`**: Tabular and JSON rendering of results
//!
//! # Architecture
//!
//! The scheduler is a pure function from validated jobs to a `Solution`.
//! Input, validation and reporting sit beside it and exchange plain data;
//! the scheduler never calls into them or performs I/O.
//!
//! ```
//! use u_interval::{schedule, Job};
//!
//! let jobs = [Job::new(1, 3, 5), Job::new(2, 5, 6), Job::new(5, 8, 11)];
//! let solution = schedule(&jobs).unwrap();
//! assert_eq!(solution.max_profit, 17);
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 16.1

pub mod error;
pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::DomainError;
pub use models::{Job, Solution};
pub use scheduler::{schedule, IntervalScheduler};
