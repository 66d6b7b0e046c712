//! # eelsPeak Converter
//!
//! Command-line tool for converting EELSDB record exports (JSON metadata
//! plus a companion `.msa` spectrum) into structured archive records.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a record; writes <input>.record.json next to it
//! eelspeak convert spectrum/metadata.json
//!
//! # Inspect an msa export or a JSON record
//! eelspeak info spectrum/spectrum.msa
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
