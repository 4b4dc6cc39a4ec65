//! Classify an instance with the saved model.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use verspace::prelude::*;

use super::{class_name, load_model};
use crate::config::Config;

#[derive(Serialize)]
struct Prediction<'a> {
    values: &'a [String],
    label: Label,
    class: String,
    converged: bool,
}

/// Split "sunny, warm" into trimmed values.
pub fn parse_values(input: &str) -> Vec<String> {
    input.split(',').map(|v| v.trim().to_string()).collect()
}

pub fn run(input: &str, json: bool) -> Result<()> {
    let config = Config::load()?;
    let learner = load_model()?;
    let values = parse_values(input);
    let label = learner.classify(&values)?;
    let class = class_name(&learner, label, &config.learner.negative_label);
    let converged = learner.converged().is_some();

    if json {
        let prediction = Prediction {
            values: &values,
            label,
            class,
            converged,
        };
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    let shown = if label.is_positive() {
        class.green().bold()
    } else {
        class.red().bold()
    };
    println!("{} {}", values.join(", ").cyan(), shown);
    if !converged {
        println!(
            "  {} version space has not converged; negative by default",
            "•".yellow()
        );
    }
    Ok(())
}
