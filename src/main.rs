//! u-interval: weighted interval scheduling CLI.
//!
//! Reads candidate jobs, drops invalid records (or rejects them with
//! `--strict`), and prints the maximum-profit non-overlapping selection.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use u_interval::input::{self, InputFormat};
use u_interval::scheduler::{sort_by_finish, CompatibilitySearch, IntervalScheduler};
use u_interval::{report, validation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "u-interval")]
#[command(about = "Maximum-profit non-overlapping job selection", long_about = None)]
struct Cli {
    /// Job records file (reads stdin when omitted)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Input encoding: text (`start finish profit` triples) or json
    #[arg(long, env = "U_INTERVAL_FORMAT", default_value = "text")]
    format: InputFormat,

    /// Compatibility search strategy: linear or binary
    #[arg(long, env = "U_INTERVAL_SEARCH", default_value = "binary")]
    search: CompatibilitySearch,

    /// Output encoding
    #[arg(long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Fail on the first invalid or malformed record instead of discarding it
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "u_interval=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let records = match &cli.input {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            input::read_records(BufReader::new(file), cli.format)
        }
        None => input::read_records(io::stdin().lock(), cli.format),
    }
    .into_diagnostic()?;
    info!(records = records.len(), "job records loaded");

    let scheduler = IntervalScheduler::new().with_search(cli.search);

    let (jobs, validation_report) = if cli.strict {
        (input::require_well_formed(records).into_diagnostic()?, None)
    } else {
        let checked = validation::partition(records);
        if checked.has_rejections() {
            info!(rejected = checked.rejected.len(), "invalid records discarded");
        }
        (checked.accepted.clone(), Some(checked))
    };

    let solution = scheduler.schedule(&jobs).into_diagnostic()?;

    match cli.output {
        OutputFormat::Text => {
            let sorted = sort_by_finish(&jobs);
            print!(
                "{}",
                report::format_summary(&sorted, &solution, validation_report.as_ref())
            );
        }
        OutputFormat::Json => {
            let json = report::to_json(&solution, validation_report.as_ref()).into_diagnostic()?;
            println!("{json}");
        }
    }

    Ok(())
}
