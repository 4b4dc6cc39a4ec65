//! Learn one concept per class value.

use anyhow::Result;
use colored::Colorize;
use verspace::prelude::*;

use super::{load_dataset, print_boundaries};
use crate::config::Config;

pub fn run(file: &str, class: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let class = class.or(config.learner.class_attribute);
    let data = load_dataset(file, class.as_deref())?;
    let instances = data.instances()?;

    println!(
        "{} Learning {} concepts from {} examples...",
        "→".blue(),
        data.schema().class_attribute()?.values.len().to_string().cyan(),
        instances.len().to_string().cyan()
    );

    for concept in train_one_vs_rest(data.schema(), &instances)? {
        println!();
        println!("{}", format!("Concept '{}'", concept.label).white().bold());
        println!("{}", "─".repeat(40).dimmed());
        print_boundaries(&concept.result.specific, &concept.result.general);

        let status = match (concept.result.collapsed_at, concept.result.converged()) {
            (Some(index), _) => format!("collapsed at example {}", index + 1).red(),
            (None, Some(h)) => format!("converged to {}", h).green(),
            (None, None) => "not converged".yellow(),
        };
        println!("  Status: {}", status);
    }

    Ok(())
}
