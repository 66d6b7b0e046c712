use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod convert;
mod info;

/// eelsPeak - EELSDB record export converter
#[derive(Parser)]
#[command(name = "eelspeak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON record (plus companion .msa) to an archive record
    Convert {
        /// Input JSON record path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path for the converted record (defaults to <input>.record.json)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Print the record to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Display information about an msa export or a JSON record
    Info {
        /// Input .msa or .json file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            compact,
            stdout,
        } => convert::run(input, output, compact, stdout),
        Commands::Info { file } => info::run(file),
    }
}
