//! Sweep commands: mean accuracy as `k` or the split size varies

use crate::error::{CliError, Result};
use crate::output;
use clap::Args;
use plurality::evaluation::{sweep_k, sweep_training_fraction};
use plurality::model_selection::DEFAULT_TRAINING_FRACTION;
use std::path::PathBuf;

/// Arguments for `plurality sweep-k`
#[derive(Args, Debug)]
pub(crate) struct SweepKArgs {
    /// Labelled CSV file (label in the last column)
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Largest k to try; every k from 1 up to this is evaluated
    #[arg(long, default_value_t = 10)]
    pub k_max: usize,

    /// Random splits averaged per k
    #[arg(long, default_value_t = 10)]
    pub trials: usize,

    /// Fraction of samples used for training
    #[arg(long, default_value_t = DEFAULT_TRAINING_FRACTION)]
    pub training_fraction: f64,

    /// Base seed; trial t uses seed + t
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the first line of the file
    #[arg(long)]
    pub has_headers: bool,
}

/// Arguments for `plurality sweep-split`
#[derive(Args, Debug)]
pub(crate) struct SweepSplitArgs {
    /// Labelled CSV file (label in the last column)
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Number of neighbors that vote
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Random splits averaged per test fraction
    #[arg(long, default_value_t = 10)]
    pub trials: usize,

    /// Smallest test fraction
    #[arg(long, default_value_t = 0.25)]
    pub min_test: f64,

    /// Largest test fraction
    #[arg(long, default_value_t = 0.95)]
    pub max_test: f64,

    /// Increment between test fractions
    #[arg(long, default_value_t = 0.05)]
    pub step: f64,

    /// Base seed; trial t uses seed + t
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the first line of the file
    #[arg(long)]
    pub has_headers: bool,
}

/// Run the sweep-k command
pub(crate) fn run_k(args: &SweepKArgs, json: bool) -> Result<()> {
    if args.k_max == 0 {
        return Err(CliError::InvalidConfig("--k-max must be >= 1".to_string()));
    }
    let dataset = super::load_dataset(&args.data, args.has_headers)?;
    let ks: Vec<usize> = (1..=args.k_max).collect();
    let points = sweep_k(
        &dataset,
        &ks,
        args.training_fraction,
        args.trials,
        args.seed,
    )?;

    if json {
        return output::json(&points);
    }

    output::section("Accuracy vs k");
    output::kv("File", args.data.display());
    output::kv("Training fraction", args.training_fraction);
    output::kv("Trials", args.trials);
    println!();
    output::sweep_table("k", &points, |v| format!("{v:.0}"));
    Ok(())
}

/// Run the sweep-split command
pub(crate) fn run_split(args: &SweepSplitArgs, json: bool) -> Result<()> {
    let test_fractions = test_fractions(args.min_test, args.max_test, args.step)?;
    let dataset = super::load_dataset(&args.data, args.has_headers)?;
    let training: Vec<f64> = test_fractions.iter().map(|t| 1.0 - t).collect();
    let points = sweep_training_fraction(&dataset, &training, args.k, args.trials, args.seed)?;

    if json {
        return output::json(&points);
    }

    output::section("Accuracy vs test fraction");
    output::kv("File", args.data.display());
    output::kv("k", args.k);
    output::kv("Trials", args.trials);
    println!();
    output::sweep_table("test", &points, |v| format!("{:.2}", 1.0 - v));
    Ok(())
}

/// Test fractions from `min` to `max` inclusive in increments of `step`.
///
/// Values are computed as `min + i * step` so rounding does not accumulate.
fn test_fractions(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(step > 0.0 && step.is_finite()) {
        return Err(CliError::InvalidConfig(format!(
            "--step must be positive, got {step}"
        )));
    }
    if !(min > 0.0 && max < 1.0 && min <= max) {
        return Err(CliError::InvalidConfig(format!(
            "test fractions must satisfy 0 < min <= max < 1, got {min}..{max}"
        )));
    }

    let count = ((max - min) / step + 1e-9).floor() as usize + 1;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}
