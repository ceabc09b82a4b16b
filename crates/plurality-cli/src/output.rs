//! Output formatting utilities

use crate::error::{CliError, Result};
use colored::Colorize;
use plurality::evaluation::SweepPoint;
use serde::Serialize;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print a warning message
pub(crate) fn warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// Print an error message
pub(crate) fn error(msg: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), msg);
}

/// Print a JSON document on stdout
pub(crate) fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Classification(format!("JSON encoding failed: {e}")))?;
    println!("{text}");
    Ok(())
}

/// Format an accuracy percentage, or `n/a` when undefined
pub(crate) fn format_accuracy(accuracy: Option<f64>) -> String {
    accuracy.map_or_else(|| "n/a".to_string(), |a| format!("{a:.2}%"))
}

/// Print a sweep as an aligned table
pub(crate) fn sweep_table(header: &str, points: &[SweepPoint], value: impl Fn(f64) -> String) {
    println!(
        "  {}  {}",
        format!("{header:>10}").white().bold(),
        format!("{:>14}", "mean accuracy").white().bold()
    );
    for point in points {
        println!(
            "  {:>10}  {:>14}",
            value(point.value),
            format_accuracy(point.mean_accuracy)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_accuracy() {
        assert_eq!(format_accuracy(Some(93.333_333)), "93.33%");
        assert_eq!(format_accuracy(Some(100.0)), "100.00%");
        assert_eq!(format_accuracy(None), "n/a");
    }
}
