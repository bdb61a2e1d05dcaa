//! Extract clinical attribute definitions from a staging data file.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use biostage_cli::args::LoggingArgs;
use biostage_cli::exit;
use biostage_ingest::{AttributeDefinition, AttributeError, read_attribute_definitions};

#[derive(Parser)]
#[command(
    name = "extract_clinical_attributes",
    version,
    about = "Extract attribute definitions from a clinical staging file",
    long_about = "Read the five-line attribute preamble of a clinical data file and\n\
                  write one definition row per attribute column:\n\
                  attribute, name, description, type, priority, stage_meta_id.\n\
                  Patient/sample identifier columns are excluded."
)]
struct Cli {
    /// Clinical data file opening with the five-line attribute preamble.
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Stage meta id stamped onto every output row.
    #[arg(value_name = "STAGE_META_ID")]
    stage_meta_id: String,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::INPUT_SHAPE);
    }

    let definitions = match read_attribute_definitions(&cli.file) {
        Ok(definitions) => definitions,
        Err(error) => {
            let code = match &error {
                AttributeError::Read { .. } => exit::INPUT_SHAPE,
                AttributeError::TooShort { .. } => exit::ATTRIBUTES_TOO_SHORT,
                AttributeError::ColumnMismatch { .. } => exit::ATTRIBUTES_COLUMN_MISMATCH,
            };
            eprintln!("error: {error}");
            std::process::exit(code);
        }
    };

    if let Err(error) = write_definitions(&definitions, &cli.stage_meta_id) {
        eprintln!("error: {error:#}");
        std::process::exit(exit::INPUT_SHAPE);
    }
}

fn write_definitions(definitions: &[AttributeDefinition], stage_meta_id: &str) -> Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    writeln!(out, "attribute\tname\tdescription\ttype\tpriority\tstage_meta_id")
        .context("write header")?;
    for definition in definitions {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{stage_meta_id}",
            definition.attribute,
            definition.name,
            definition.description,
            definition.data_type,
            definition.priority,
        )
        .context("write definition")?;
    }
    out.flush().context("flush output")
}
