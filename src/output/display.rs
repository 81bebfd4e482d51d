//! Display functions for command results

use super::formatters::{colorize_result, guesses_label, result_to_emoji};
use crate::commands::ScoreReport;
use colored::Colorize;

/// Print the result of scoring a list of guesses
pub fn print_score_report(report: &ScoreReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Secret: {}", report.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {}  {}  {}",
            i + 1,
            colorize_result(&step.result),
            step.result,
            result_to_emoji(&step.result)
        );

        if verbose {
            println!("  Letters: {}", step.knowledge);
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!("✅ Solved in {}!", guesses_label(report.steps.len()))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {}", guesses_label(report.steps.len()))
                .red()
                .bold()
        );
    }
}
