//! Predict command: pre-split training and test files

use crate::error::Result;
use crate::output;
use clap::Args;
use plurality::evaluation::{evaluate, evaluate_unlabelled};
use std::path::PathBuf;

/// Arguments for `plurality predict`
#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Labelled training CSV file
    #[arg(long, value_name = "FILE")]
    pub train: PathBuf,

    /// Test CSV file
    #[arg(long, value_name = "FILE")]
    pub test: PathBuf,

    /// Number of neighbors that vote
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// The test file has no label column
    #[arg(long)]
    pub unlabelled: bool,

    /// Skip the first line of each file
    #[arg(long)]
    pub has_headers: bool,
}

/// Run the predict command
pub(crate) fn run(args: &PredictArgs, json: bool) -> Result<()> {
    let train = super::load_dataset(&args.train, args.has_headers)?;

    let (result, actual) = if args.unlabelled {
        let test = super::load_features(&args.test, args.has_headers)?;
        (evaluate_unlabelled(&train, &test, args.k)?, None)
    } else {
        let test = super::load_dataset(&args.test, args.has_headers)?;
        let result = evaluate(&train, &test, args.k)?;
        (result, Some(test.into_parts().1))
    };

    if json {
        return output::json(&result);
    }

    output::section("Predictions");
    output::kv("Training file", args.train.display());
    output::kv("Test file", args.test.display());
    output::kv("k", args.k);
    println!();
    for (i, predicted) in result.predictions.iter().enumerate() {
        match actual.as_ref().map(|labels| &labels[i]) {
            Some(label) => {
                let mark = if label == predicted { " " } else { "x" };
                println!("  {mark} {i:>4}  {predicted:<20} (actual {label})");
            }
            None => println!("    {i:>4}  {predicted}"),
        }
    }

    if !args.unlabelled {
        output::section("Result");
        if result.accuracy.is_none() {
            output::warning("test set is empty; accuracy is undefined");
        }
        output::kv("Accuracy", output::format_accuracy(result.accuracy));
    }
    Ok(())
}
