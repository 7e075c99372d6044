//! `callpeak` CLI - compute peak concurrent calls per customer per UTC day.
//!
//! ## Usage
//!
//! ```sh
//! # Analyze call records (stdin → stdout)
//! cat calls.json | callpeak analyze
//!
//! # Analyze from file to file, pretty-printed
//! callpeak analyze -i calls.json -o results.json --pretty
//!
//! # Break peak ties by earliest instant instead of input order
//! callpeak analyze -i calls.json --tie-break earliest
//!
//! # Show how each call is split across UTC days
//! callpeak split -i calls.json
//!
//! # Summary of a record set
//! callpeak stats -i calls.json
//! ```

use anyhow::{Context, Result};
use callpeak::{CallRecord, CodecConfig, ConcurrencyAnalyzer, ResultEntry, TieBreak};
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashSet;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "callpeak",
    version,
    about = "Peak concurrent calls per customer per UTC day"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-customer, per-day peak concurrency
    Analyze {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// How to choose between instants reaching the same peak
        #[arg(long, value_enum, default_value_t = TieBreakArg::ScanOrder)]
        tie_break: TieBreakArg,
    },
    /// Split every call into per-UTC-day segments
    Split {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show record counts and the busiest customer-day
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// First peak instant in input order
    ScanOrder,
    /// Chronologically earliest peak instant
    Earliest,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::ScanOrder => TieBreak::ScanOrder,
            TieBreakArg::Earliest => TieBreak::Earliest,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Analyze {
            input,
            output,
            pretty,
            tie_break,
        } => {
            let records = read_records(input.as_deref())?;
            let analyzer = ConcurrencyAnalyzer::with_tie_break(tie_break.into());
            let results = analyzer
                .analyze(&records)
                .context("Failed to analyze call records")?;
            info!(
                records = records.len(),
                entries = results.len(),
                "analysis complete"
            );
            let json = callpeak::encode_results(&results, &CodecConfig { pretty })
                .context("Failed to encode results")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Split {
            input,
            output,
            pretty,
        } => {
            let records = read_records(input.as_deref())?;
            for record in &records {
                record.validate().context("Failed to split call records")?;
            }
            let segments: Vec<_> = records.iter().flat_map(callpeak::split_by_day).collect();
            debug!(
                records = records.len(),
                segments = segments.len(),
                "split records"
            );
            let json = callpeak::encode_segments(&segments, &CodecConfig { pretty })
                .context("Failed to encode segments")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Stats { input } => {
            let records = read_records(input.as_deref())?;
            let results = callpeak::analyze(&records).context("Failed to analyze call records")?;
            let customers: HashSet<i64> = records.iter().map(|r| r.customer_id).collect();

            println!("Records:        {}", records.len());
            println!("Customers:      {}", customers.len());
            println!("Customer-days:  {}", results.len());
            // Ties keep the first entry in (customer, date) order.
            let mut busiest: Option<&ResultEntry> = None;
            for entry in &results {
                if busiest.is_none_or(|b| entry.max_concurrent_calls > b.max_concurrent_calls) {
                    busiest = Some(entry);
                }
            }
            if let Some(entry) = busiest {
                println!(
                    "Busiest:        customer {} on {} ({} concurrent)",
                    entry.customer_id, entry.date, entry.max_concurrent_calls
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn read_records(path: Option<&str>) -> Result<Vec<CallRecord>> {
    let json = read_input(path)?;
    callpeak::decode_call_records(&json).context("Failed to decode call records")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
