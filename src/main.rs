//! One-shot command-line front end.
//!
//! Usage: `selfcheck <symptoms> [additional-info] [other-relevant-info]`
//!
//! Runs a single analysis and prints the advisory followed by the ranked
//! condition list. Transport concerns (auth, rate limiting, persistence)
//! belong to real front ends; this one exists to exercise the engine end
//! to end.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use selfcheck::{config, input, SymptomAnalyzer};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(symptoms) = args.first() else {
        eprintln!("usage: selfcheck <symptoms> [additional-info] [other-relevant-info]");
        return ExitCode::from(2);
    };
    let additional_info = args.get(1).map(String::as_str).unwrap_or("");
    let other_relevant_info = args.get(2).map(String::as_str).unwrap_or("");

    let input = match input::prepare(symptoms, additional_info, other_relevant_info, None) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let result = SymptomAnalyzer::new().analyze(&input);

    println!("{}", result.text);
    println!();
    println!("Confidence: {:.0}%", result.confidence * 100.0);
    println!("Candidate conditions:");
    for condition in &result.conditions {
        println!("  {:>3}%  {}", condition.percentage, condition.condition);
    }

    ExitCode::SUCCESS
}
