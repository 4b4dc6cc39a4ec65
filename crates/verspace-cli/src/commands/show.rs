//! Show the saved model.

use anyhow::Result;
use colored::Colorize;

use super::{describe_size, load_model, print_boundaries};

pub fn run() -> Result<()> {
    let learner = load_model()?;
    let space = learner.version_space();
    let schema = learner.schema();

    println!("{}", "Verspace Model".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Attributes".blue().bold());
    for attribute in schema.features() {
        println!("  {:<16} {{{}}}", attribute.name, attribute.values.join(", "));
    }
    if let Ok(class) = schema.class_attribute() {
        println!(
            "  {:<16} {{{}}} (class, positive '{}')",
            class.name,
            class.values.join(", "),
            learner.positive_label().green()
        );
    }
    println!();

    print_boundaries(learner.specific(), learner.general());
    println!();

    println!("{}", "Status".blue().bold());
    println!(
        "  Examples seen:     {}",
        learner.examples_seen().to_string().cyan()
    );
    match (learner.collapsed_at(), space.hypothesis()) {
        (Some(index), _) => println!(
            "  Collapsed:         at example {}",
            (index + 1).to_string().red()
        ),
        (None, Some(h)) => println!("  Converged:         {}", h.to_string().green()),
        (None, None) => println!("  Version space:     {}", describe_size(&space).cyan()),
    }

    Ok(())
}
