//! Discover dataset descriptors and emit canonical metadata records.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use biostage_cli::args::LoggingArgs;
use biostage_cli::exit;
use biostage_ingest::{IngestError, scan_paths};
use biostage_model::{META_COLUMNS, MetaRecord};

#[derive(Parser)]
#[command(
    name = "scan_meta",
    version,
    about = "Scan a genomic-data deposit for dataset descriptors",
    long_about = "Walk the given paths (directories, glob patterns, or descriptor\n\
                  files), parse every meta_* descriptor found, and write one\n\
                  canonical tab-separated record per descriptor to standard output."
)]
struct Cli {
    /// Paths to scan: directories, glob patterns, or descriptor files
    /// (default: the current directory).
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::INPUT_SHAPE);
    }

    let paths = if cli.paths.is_empty() {
        vec![".".to_string()]
    } else {
        cli.paths
    };

    let records = match scan_paths(&paths) {
        Ok(records) => records,
        Err(error @ IngestError::NoMetadataFound { .. }) => {
            eprintln!("error: {error}");
            std::process::exit(exit::NO_METADATA);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(exit::INPUT_SHAPE);
        }
    };
    info!(count = records.len(), "descriptors discovered");

    if let Err(error) = write_records(&records) {
        eprintln!("error: {error:#}");
        std::process::exit(exit::INPUT_SHAPE);
    }
}

fn write_records(records: &[MetaRecord]) -> Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    writeln!(out, "{}", META_COLUMNS.join("\t")).context("write header")?;
    for record in records {
        writeln!(out, "{}", record.to_tsv_row()).context("write record")?;
    }
    out.flush().context("flush output")
}
