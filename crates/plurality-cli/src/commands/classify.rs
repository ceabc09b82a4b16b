//! Classify command: random split of one labelled file, then kNN

use crate::error::Result;
use crate::output;
use clap::Args;
use plurality::evaluation::evaluate;
use plurality::model_selection::{train_test_split, DEFAULT_TRAINING_FRACTION};
use std::path::PathBuf;

/// Arguments for `plurality classify`
#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Labelled CSV file (label in the last column)
    #[arg(long, value_name = "FILE")]
    pub data: PathBuf,

    /// Number of neighbors that vote
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Fraction of samples used for training
    #[arg(long, default_value_t = DEFAULT_TRAINING_FRACTION)]
    pub training_fraction: f64,

    /// Seed for the shuffle (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the first line of the file
    #[arg(long)]
    pub has_headers: bool,
}

/// Run the classify command
pub(crate) fn run(args: &ClassifyArgs, json: bool) -> Result<()> {
    let dataset = super::load_dataset(&args.data, args.has_headers)?;
    let (train, test) = train_test_split(&dataset, args.training_fraction, args.seed)?;
    let result = evaluate(&train, &test, args.k)?;

    if json {
        return output::json(&result);
    }

    output::section("Classification");
    output::kv("File", args.data.display());
    output::kv("Samples", dataset.len());
    output::kv("Features", dataset.n_features());
    output::kv("Training samples", train.len());
    output::kv("Test samples", test.len());
    output::kv("k", args.k);
    if let Some(seed) = args.seed {
        output::kv("Seed", seed);
    }

    output::section("Predictions");
    for (i, (predicted, actual)) in result.predictions.iter().zip(test.labels()).enumerate() {
        let mark = if predicted == actual { " " } else { "x" };
        println!("  {mark} {i:>4}  {predicted:<20} (actual {actual})");
    }

    output::section("Result");
    if result.accuracy.is_none() {
        output::warning("test set is empty; accuracy is undefined");
    }
    output::kv("Accuracy", output::format_accuracy(result.accuracy));
    Ok(())
}
