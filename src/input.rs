//! Job record acquisition.
//!
//! Reads candidate jobs from text or JSON. Parsing only checks syntax:
//! a well-formed record with a zero start or an empty interval is
//! returned as a job and left to [`validation`](crate::validation).
//! A malformed text line does not abort the read; it becomes a
//! [`RawRecord::Malformed`] entry and the remaining lines are kept.
//!
//! # Text Format
//!
//! Whitespace-separated integers read three at a time as
//! `start finish profit`. A line may hold several triples.
//!
//! ```text
//! 1 3 5
//! 2 5 6   4 6 5
//! ```
//!
//! # JSON Format
//!
//! An array of `{"start": .., "finish": .., "profit": ..}` objects.

use std::fmt;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

use crate::models::Job;

/// Errors that abort reading a record source.
#[derive(Debug, Error)]
pub enum InputError {
    /// JSON input could not be decoded.
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading the source failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A malformed line was found where none are allowed.
    #[error(transparent)]
    Malformed(#[from] MalformedRecord),
}

/// Why a text line could not be read as job records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A token is not an integer.
    #[error("token {position} ('{token}') is not an integer")]
    InvalidToken {
        /// 1-based token position within the line.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// The line does not hold a whole number of triples.
    #[error("incomplete record: expected 3 values, found {found}")]
    IncompleteRecord {
        /// Values left over after the last full triple.
        found: usize,
    },
}

/// A text line that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line} ('{text}'): {error}")]
pub struct MalformedRecord {
    /// 1-based line number.
    pub line: usize,
    /// Line content, trimmed.
    pub text: String,
    /// What was wrong with it.
    pub error: RecordError,
}

/// One entry read from a record source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawRecord {
    /// A syntactically valid job (not yet domain-checked).
    Job(Job),
    /// A line that could not be parsed.
    Malformed(MalformedRecord),
}

impl From<Job> for RawRecord {
    fn from(job: Job) -> Self {
        Self::Job(job)
    }
}

impl fmt::Display for RawRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Job(job) => write!(f, "{job}"),
            Self::Malformed(m) => write!(f, "{}", m.text),
        }
    }
}

/// Encoding of a job record source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// `start finish profit` triples.
    #[default]
    Text,
    /// JSON array of job objects.
    Json,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown input format '{other}', expected text or json")),
        }
    }
}

fn parse_line(line: &str) -> Result<Vec<Job>, RecordError> {
    let values = line
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<i64>().map_err(|_| RecordError::InvalidToken {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<i64>, _>>()?;

    let chunks = values.chunks_exact(3);
    let found = chunks.remainder().len();
    if found != 0 {
        return Err(RecordError::IncompleteRecord { found });
    }

    Ok(chunks.map(|c| Job::new(c[0], c[1], c[2])).collect())
}

/// Parses `start finish profit` triples line by line.
///
/// Blank lines are skipped. A line with a non-integer token or a partial
/// triple yields one [`RawRecord::Malformed`] and none of its values.
pub fn parse_text(source: &str) -> Vec<RawRecord> {
    let mut records = Vec::new();

    for (i, line) in source.lines().enumerate() {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        match parse_line(text) {
            Ok(jobs) => records.extend(jobs.into_iter().map(RawRecord::Job)),
            Err(error) => records.push(RawRecord::Malformed(MalformedRecord {
                line: i + 1,
                text: text.to_string(),
                error,
            })),
        }
    }

    records
}

/// Parses a JSON array of job objects.
pub fn parse_json(source: &str) -> Result<Vec<RawRecord>, InputError> {
    let jobs: Vec<Job> = serde_json::from_str(source)?;
    Ok(jobs.into_iter().map(RawRecord::Job).collect())
}

/// Parses `source` in the given format.
pub fn parse(source: &str, format: InputFormat) -> Result<Vec<RawRecord>, InputError> {
    match format {
        InputFormat::Text => Ok(parse_text(source)),
        InputFormat::Json => parse_json(source),
    }
}

/// Reads all of `reader` and parses it in the given format.
pub fn read_records<R: Read>(
    mut reader: R,
    format: InputFormat,
) -> Result<Vec<RawRecord>, InputError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse(&source, format)
}

/// Unwraps every record into a job, failing on the first malformed one.
pub fn require_well_formed(records: Vec<RawRecord>) -> Result<Vec<Job>, InputError> {
    records
        .into_iter()
        .map(|r| match r {
            RawRecord::Job(job) => Ok(job),
            RawRecord::Malformed(m) => Err(InputError::Malformed(m)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jobs_of(records: &[RawRecord]) -> Vec<Job> {
        records
            .iter()
            .filter_map(|r| match r {
                RawRecord::Job(job) => Some(*job),
                RawRecord::Malformed(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_text_triples() {
        let records = parse_text("1 3 5\n2 5 6   4 6 5\n");
        assert_eq!(
            records,
            vec![
                RawRecord::Job(Job::new(1, 3, 5)),
                RawRecord::Job(Job::new(2, 5, 6)),
                RawRecord::Job(Job::new(4, 6, 5)),
            ]
        );
    }

    #[test]
    fn test_parse_text_empty() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("  \n\t\n").is_empty());
    }

    #[test]
    fn test_parse_text_keeps_invalid_values() {
        let records = parse_text("0 6 9\n-1 2 3");
        assert_eq!(jobs_of(&records), vec![Job::new(0, 6, 9), Job::new(-1, 2, 3)]);
    }

    #[test]
    fn test_bad_token_skips_only_its_line() {
        let records = parse_text("1 3 5\n2 x 6\n4 6 5");

        assert_eq!(records.len(), 3);
        assert_eq!(jobs_of(&records), vec![Job::new(1, 3, 5), Job::new(4, 6, 5)]);
        assert_eq!(
            records[1],
            RawRecord::Malformed(MalformedRecord {
                line: 2,
                text: "2 x 6".to_string(),
                error: RecordError::InvalidToken {
                    position: 2,
                    token: "x".to_string(),
                },
            })
        );
    }

    #[test]
    fn test_incomplete_line() {
        let records = parse_text("1 2 3 4 5\n6 7 8");
        assert_eq!(jobs_of(&records), vec![Job::new(6, 7, 8)]);
        assert!(matches!(
            &records[0],
            RawRecord::Malformed(MalformedRecord {
                line: 1,
                error: RecordError::IncompleteRecord { found: 2 },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_json() {
        let source = r#"[{"start":1,"finish":2,"profit":50},{"start":2,"finish":10,"profit":200}]"#;
        let records = parse_json(source).unwrap();
        assert_eq!(jobs_of(&records), vec![Job::new(1, 2, 50), Job::new(2, 10, 200)]);
    }

    #[test]
    fn test_parse_json_invalid() {
        assert!(matches!(parse_json("[{"), Err(InputError::Json(_))));
    }

    #[test]
    fn test_read_records_from_reader() {
        let records = read_records("1 2 3".as_bytes(), InputFormat::Text).unwrap();
        assert_eq!(records, vec![RawRecord::Job(Job::new(1, 2, 3))]);
    }

    #[test]
    fn test_require_well_formed() {
        let ok = require_well_formed(parse_text("1 2 3\n0 4 1")).unwrap();
        assert_eq!(ok, vec![Job::new(1, 2, 3), Job::new(0, 4, 1)]);

        let err = require_well_formed(parse_text("1 2 3\n4 5")).unwrap_err();
        assert!(matches!(err, InputError::Malformed(MalformedRecord { line: 2, .. })));
    }

    #[test]
    fn test_input_format_from_str() {
        assert_eq!("TEXT".parse::<InputFormat>().unwrap(), InputFormat::Text);
        assert_eq!("json".parse::<InputFormat>().unwrap(), InputFormat::Json);
        assert!("yaml".parse::<InputFormat>().is_err());
    }
}
