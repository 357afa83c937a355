//! Firmware-to-COE converter CLI.
//!
//! This binary wraps the conversion library for use from a firmware build
//! tree. It performs:
//! 1. **Convert:** Read `firmware.bin` from the working directory and write
//!    `firmware.coe` next to it, one 8-bit hex token per byte.
//! 2. **Report:** Print a single confirmation line on success, or a
//!    diagnostic on stderr and exit status 1 on failure.
//!
//! The file names are fixed. Run the tool from the directory that holds the
//! compiled firmware image.

use std::path::Path;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use bin2coe_core::{ConvertError, convert};

/// Firmware image expected in the working directory.
const INPUT_FILE: &str = "firmware.bin";
/// Memory-initialization file written next to the input.
const OUTPUT_FILE: &str = "firmware.coe";

#[derive(Parser, Debug)]
#[command(
    name = "bin2coe",
    version,
    about = "Converts firmware.bin into a COE memory-initialization file",
    long_about = "Reads firmware.bin from the working directory and writes firmware.coe next to it,\none lowercase two-digit hex token per image byte, ready for block RAM initialization.\n\nThe file names are fixed; run the tool from the directory that holds firmware.bin."
)]
struct Cli {}

fn main() {
    let Cli {} = Cli::parse();
    init_tracing();

    match convert(Path::new(INPUT_FILE), Path::new(OUTPUT_FILE)) {
        Ok(()) => println!("Successfully created {OUTPUT_FILE} (8-bit entries)"),
        Err(err @ ConvertError::InputNotFound(_)) => {
            eprintln!("Error: {err}. Run 'make' to compile first.");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

/// Installs the stderr log subscriber, honouring `RUST_LOG` when set.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
