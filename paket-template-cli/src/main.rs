//! paket-template CLI - Command-line interface
//!
//! Finds, inspects and validates `paket.template` files using the
//! paket-template library.

mod commands;
mod error;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};

use commands::{check, find, show};
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "paket-template", version, about = "Inspect and validate paket.template files")]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List template files below a directory
    Find {
        /// Directory to search
        #[arg(default_value = ".")]
        root: PathBuf,

        /// File name suffix identifying templates (overrides config)
        #[arg(long)]
        suffix: Option<String>,
    },

    /// Parse a template file and print its contents
    Show {
        /// Template file to parse
        file: PathBuf,

        /// Print JSON instead of a human-readable summary
        #[arg(long)]
        json: bool,

        /// Reject malformed block lines instead of dropping them
        #[arg(long)]
        strict: bool,
    },

    /// Parse every template below a directory and report failures
    Check {
        /// Directory to search
        #[arg(default_value = ".")]
        root: PathBuf,

        /// File name suffix identifying templates (overrides config)
        #[arg(long)]
        suffix: Option<String>,

        /// Reject malformed block lines instead of dropping them
        #[arg(long)]
        strict: bool,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = commands::common::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Find { root, suffix } => find::run(&config, root, suffix),
        Commands::Show { file, json, strict } => show::run(&config, &file, json, strict),
        Commands::Check {
            root,
            suffix,
            strict,
        } => check::run(&config, root, suffix, strict),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
