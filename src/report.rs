//! Result presentation.
//!
//! Renders candidate jobs and scheduler results for display. Pure string
//! building; callers decide where the output goes.

use serde::Serialize;
use std::fmt::Write;

use crate::models::{Job, Solution};
use crate::validation::{RejectedRecord, ValidationReport};

/// Width of the index column in [`format_input_table`].
pub const INDEX_WIDTH: usize = 15;
/// Width of each job detail column in [`format_input_table`].
pub const JOB_DETAILS_WIDTH: usize = 10;

/// Note printed when some input records were discarded.
pub const REJECTED_NOTE: &str =
    "*Please note that one or more entries were invalid and excluded from the data set";

/// Tabulates jobs with 1-based indices.
///
/// ```text
///     Index<i>       S<i>      F<i>      W<i>
///     1              1         3         5
/// ```
pub fn format_input_table(jobs: &[Job]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\t{:<iw$}{:<dw$}{:<dw$}{}",
        "Index<i>",
        "S<i>",
        "F<i>",
        "W<i>",
        iw = INDEX_WIDTH,
        dw = JOB_DETAILS_WIDTH,
    );
    for (i, job) in jobs.iter().enumerate() {
        let _ = writeln!(
            out,
            "\t{:<iw$}{:<dw$}{:<dw$}{:<dw$}",
            i + 1,
            job.start,
            job.finish,
            job.profit,
            iw = INDEX_WIDTH,
            dw = JOB_DETAILS_WIDTH,
        );
    }
    out
}

/// Lists the selected jobs as `(s, f, w), (s, f, w)`.
pub fn format_optimal_set(solution: &Solution) -> String {
    solution
        .iter()
        .map(Job::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full human-readable report for one run.
///
/// Includes the rejection note when `validation` discarded anything.
pub fn format_summary(
    jobs: &[Job],
    solution: &Solution,
    validation: Option<&ValidationReport>,
) -> String {
    let mut out = String::new();
    if validation.is_some_and(ValidationReport::has_rejections) {
        let _ = writeln!(out, "{REJECTED_NOTE}\n");
    }
    out.push_str(&format_input_table(jobs));
    let _ = writeln!(
        out,
        "\nMaximum profit of non-overlapping scheduling is {}",
        solution.max_profit
    );
    let _ = writeln!(out, "Optimal set: {}", format_optimal_set(solution));
    out
}

#[derive(Serialize)]
struct RejectedEntry {
    index: usize,
    record: String,
    reason: String,
}

impl From<&RejectedRecord> for RejectedEntry {
    fn from(r: &RejectedRecord) -> Self {
        Self {
            index: r.index,
            record: r.record.to_string(),
            reason: r.reason.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    solution: &'a Solution,
    rejected: Vec<RejectedEntry>,
}

/// Serializes a solution as pretty-printed JSON.
///
/// The solution fields sit at the top level next to a `rejected` array
/// listing every record `validation` discarded (empty when `None`).
pub fn to_json(
    solution: &Solution,
    validation: Option<&ValidationReport>,
) -> Result<String, serde_json::Error> {
    let rejected = validation
        .map(|v| v.rejected.iter().map(RejectedEntry::from).collect())
        .unwrap_or_default();
    serde_json::to_string_pretty(&JsonReport { solution, rejected })
}
