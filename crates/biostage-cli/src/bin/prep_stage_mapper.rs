//! Route canonical metadata records to preprocessing scripts and staging
//! tables.

use std::io;

use clap::Parser;
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use tracing::debug;

use biostage_cli::args::LoggingArgs;
use biostage_cli::exit;
use biostage_map::{RouteError, lookup, route_stream, supported_keys};

#[derive(Parser)]
#[command(
    name = "prep_stage_mapper",
    version,
    about = "Map metadata records to preprocessing scripts and staging tables",
    long_about = "Read the scanner's tab-separated stream from standard input and\n\
                  write one routing entry per matched mapping to standard output:\n\
                  id, preprocessing_script, data_filepath, db_table. Records whose\n\
                  (genetic_alteration_type, datatype) combination is not supported\n\
                  abort the run."
)]
struct Cli {
    /// List the supported (alteration-type, datatype) combinations and exit.
    #[arg(long = "list-mappings")]
    list_mappings: bool,

    #[command(flatten)]
    logging: LoggingArgs,
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.logging.init() {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(exit::INPUT_SHAPE);
    }

    if cli.list_mappings {
        print_mappings();
        return;
    }

    match route_stream(io::stdin().lock(), io::stdout().lock()) {
        Ok(emitted) => {
            debug!(emitted, "routing complete");
        }
        Err(error @ RouteError::UnsupportedCombination { .. }) => {
            eprintln!("error: {error}");
            std::process::exit(exit::UNSUPPORTED_KEY);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(exit::INPUT_SHAPE);
        }
    }
}

fn print_mappings() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        "Alteration type",
        "Datatype",
        "Preprocessing script",
        "Staging table",
    ]);
    for key in supported_keys() {
        let Some(mappings) = lookup(key) else {
            continue;
        };
        for mapping in mappings {
            table.add_row(vec![
                key.alteration_type.as_str(),
                key.datatype.as_str(),
                mapping.preprocessing_script,
                mapping.db_table,
            ]);
        }
    }
    println!("{table}");
}
