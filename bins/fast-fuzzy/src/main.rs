//! fast-fuzzy: CLI tool for fuzzy matching lines of text.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use config::Config;
use fast_fuzzy::{fuzzy, levenshtein_distance, search};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "fast-fuzzy")]
#[command(about = "Fuzzy string matching from the command line")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the similarity score of two strings
    Score {
        a: String,
        b: String,
        /// Ignore accents, compatibility forms and case
        #[arg(long)]
        normalize: bool,
    },
    /// Print the Levenshtein distance between two strings
    Distance {
        a: String,
        b: String,
    },
    /// Rank lines from a file (or stdin) against a query
    Search {
        /// Query to match against
        query: String,
        /// File with one candidate per line (defaults to stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Minimum score to include (0.0 to 1.0)
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
        /// Compare case-sensitively
        #[arg(long)]
        case_sensitive: bool,
        /// Ignore accents and compatibility forms
        #[arg(long)]
        normalize: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Score { a, b, normalize } => {
            println!("{}", output::format_score(fuzzy(&a, &b, normalize)));
        }

        Commands::Distance { a, b } => {
            println!("{}", levenshtein_distance(&a, &b));
        }

        Commands::Search {
            query,
            file,
            threshold,
            limit,
            case_sensitive,
            normalize,
            json,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            match &config.path {
                Some(path) => info!(path = %path.display(), "using configuration file"),
                None => debug!("no configuration file, using defaults"),
            }

            let mut builder = config.schema.search;
            if let Some(threshold) = threshold {
                builder = builder.threshold(threshold);
            }
            if let Some(limit) = limit {
                builder = builder.limit(limit);
            }
            if case_sensitive {
                builder = builder.ignore_case(false);
            }
            if normalize {
                builder = builder.normalize(true);
            }
            let options = builder.build().context("Invalid search options")?;
            debug!(?options, "resolved search options");

            let candidates = read_candidates(file.as_deref())?;
            info!(candidates = candidates.len(), "searching");

            let results = search(&query, &candidates, &options);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_results(&query, &results);
            }
        }
    }

    Ok(())
}

/// Install a stderr logger; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact())
        .init();
}

/// Read non-blank lines from `path`, or from stdin when no path is given.
fn read_candidates(path: Option<&std::path::Path>) -> Result<Vec<String>> {
    let content = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read candidates from stdin")?;
            buffer
        }
    };

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_owned)
        .collect())
}
