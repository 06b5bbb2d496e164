use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use itax_cli::{batch, input, report};
use itax_core::{ASSESSMENT_YEAR, TaxCalculator};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Indian personal income tax calculator.
///
/// Computes slab-wise tax and education cess for a single taxpayer given on
/// the command line, or for every row of a CSV file.
#[derive(Debug, Parser)]
#[command(name = "itax", version, about, long_about = None)]
struct Cli {
    /// Sex of the taxpayer: `m` or `f`.
    #[arg(long, conflicts_with = "file")]
    sex: Option<String>,

    /// Age in completed years.
    #[arg(long, conflicts_with = "file")]
    age: Option<String>,

    /// Gross annual income in rupees.
    #[arg(long, conflicts_with = "file")]
    income: Option<String>,

    /// CSV file with `sex,age,gross_income` columns, one taxpayer per row.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print only the net tax payable.
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info`, or `debug` with `--verbose`.
/// * Writes to stderr so reports on stdout can be piped.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_single(cli: &Cli) -> anyhow::Result<()> {
    let record = input::record_from_flags(
        cli.sex.as_deref(),
        cli.age.as_deref(),
        cli.income.as_deref(),
    );
    let mut calculator =
        TaxCalculator::from_record(record.as_ref()).context("invalid taxpayer details")?;

    let net_tax = calculator.compute_tax();
    info!(category = %calculator.category(), %net_tax, "tax computed");

    print!("{}", report::render(&calculator, cli.summary));
    Ok(())
}

fn run_batch(
    cli: &Cli,
    path: &Path,
) -> anyhow::Result<()> {
    let records = batch::load_from_file(path)
        .with_context(|| format!("Failed to load batch input: {}", path.display()))?;

    let entries = batch::evaluate(&records);
    let mut failed = 0;

    for (idx, entry) in entries.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        if let Err(error) = &entry.outcome {
            warn!(row = entry.row, %error, "row rejected");
            failed += 1;
        }
        print!("{}", report::render_entry(entry, cli.summary));
    }

    info!(rows = entries.len(), failed, "batch complete");
    if failed > 0 {
        bail!("{failed} of {} rows were rejected", entries.len());
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    debug!(assessment_year = ASSESSMENT_YEAR, "using built-in slab tables");

    match &cli.file {
        Some(path) => run_batch(&cli, path),
        None => run_single(&cli),
    }
}
