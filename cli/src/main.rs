//! `wps` — pluralize nouns and filter JSON records from the shell.
//!
//! Usage:
//!   wps plural knife --count 3 --with-count
//!   wps filter --spec '["size", ["user", {"forename": "Bob"}]]' --input items.json
//!   wps exceptions
//!
//! Results go to stdout, logs to stderr.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wps_cli::{run_exceptions, run_filter, run_plural, Config};
use wps_plural::DEFAULT_COUNT;

#[derive(Parser, Debug)]
#[command(name = "wps")]
#[command(about = "Pluralize nouns and filter JSON records")]
struct Args {
    /// Path to config file (defaults to ~/.wps/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the form of a noun for a given count
    Plural {
        word: String,

        /// How many things the noun refers to
        #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
        count: i64,

        /// Prefix the result with the count
        #[arg(short = 'c', long)]
        with_count: bool,
    },
    /// Filter a JSON array of records
    Filter {
        /// Filter spec as JSON, or a bare property name
        #[arg(short, long)]
        spec: String,

        /// File holding the records (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the irregular plurals in effect
    Exceptions,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    debug!("Running {:?}", args.command);

    let output = match args.command {
        Command::Plural {
            word,
            count,
            with_count,
        } => run_plural(&config.pluralizer(), &word, count, with_count)?,
        Command::Filter { spec, input } => {
            let records = match input {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => std::io::read_to_string(std::io::stdin())
                    .context("failed to read records from stdin")?,
            };
            run_filter(&spec, &records)?
        }
        Command::Exceptions => run_exceptions(&config.pluralizer())?,
    };

    println!("{output}");
    Ok(())
}
