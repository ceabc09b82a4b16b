//! plurality - k-nearest-neighbors classification from the command line
//!
//! Usage:
//!   plurality classify --data iris.data --k 3          # Random split, classify, score
//!   plurality predict --train a.csv --test b.csv       # Pre-split files
//!   plurality predict --train a.csv --test b.csv --unlabelled
//!   plurality sweep-k --data iris.data --k-max 15      # Mean accuracy for k = 1..15
//!   plurality sweep-split --data iris.data             # Mean accuracy vs test fraction

use clap::{Parser, Subcommand};
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::classify::{self, ClassifyArgs};
use commands::predict::{self, PredictArgs};
use commands::sweep::{self, SweepKArgs, SweepSplitArgs};

/// plurality - kNN classification with plurality voting
///
/// Ties in the vote go to the label whose closest voter is nearest.
#[derive(Parser, Debug)]
#[command(name = "plurality")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split one labelled file at random, classify the test part and score it
    Classify(ClassifyArgs),

    /// Classify a test file against a separate training file
    Predict(PredictArgs),

    /// Mean accuracy for every k from 1 to --k-max
    SweepK(SweepKArgs),

    /// Mean accuracy as the test fraction grows
    SweepSplit(SweepSplitArgs),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "plurality=debug"
    } else {
        "plurality=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Classify(args) => classify::run(args, cli.json),
        Commands::Predict(args) => predict::run(args, cli.json),
        Commands::SweepK(args) => sweep::run_k(args, cli.json),
        Commands::SweepSplit(args) => sweep::run_split(args, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
