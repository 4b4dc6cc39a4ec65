//! Train a learner on an ARFF dataset.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use verspace::prelude::*;

use super::{load_dataset, print_boundaries, save_model};
use crate::config::Config;

pub struct TrainArgs {
    pub file: String,
    pub class: Option<String>,
    pub positive: Option<String>,
    pub trace: bool,
    pub json: bool,
    pub no_save: bool,
}

pub fn run(args: TrainArgs) -> Result<()> {
    let config = Config::load()?;
    let class = args.class.or(config.learner.class_attribute);
    let positive = args.positive.unwrap_or(config.learner.positive_label);
    let trace = args.trace || config.output.trace;

    let data = load_dataset(&args.file, class.as_deref())?;
    let instances = data.instances()?;
    let mut learner = CandidateElimination::new(
        data.schema().clone(),
        TrainerConfig::with_positive_label(positive),
    )?;

    if !args.json {
        println!(
            "{} Training on '{}' ({} examples, class '{}', positive '{}')...",
            "→".blue(),
            data.relation(),
            instances.len().to_string().cyan(),
            data.schema().class_attribute()?.name,
            learner.positive_label().cyan()
        );
    }

    let pb = if trace || args.json {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(instances.len() as u64)
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} examples")?
            .progress_chars("#>-"),
    );

    let total = instances.len();
    for (i, instance) in instances.iter().enumerate() {
        if trace {
            print_step_header(&learner, i, total, instance);
        }
        let observation = learner.observe(instance)?;
        if trace {
            println!("  After:");
            println!("{}", learner.boundaries());
        }
        pb.inc(1);
        if observation == Observation::Collapsed {
            break;
        }
    }
    pb.finish_and_clear();

    let result = learner.result();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&learner, &result, total);
    }

    if !args.no_save {
        save_model(&learner)?;
        if !args.json {
            println!("{} Model saved.", "✓".green());
        }
    }

    Ok(())
}

fn print_step_header(learner: &CandidateElimination, i: usize, total: usize, instance: &Instance) {
    let positive = instance.class.as_deref() == Some(learner.positive_label());
    println!();
    println!("{}", "═".repeat(57).dimmed());
    println!("--- Example {}/{} ---", i + 1, total);
    println!(
        "  Instance: {} -> {}",
        instance.values.join(", "),
        instance.class.as_deref().unwrap_or("?")
    );
    println!(
        "  Class: {}",
        if positive {
            "positive".green()
        } else {
            "negative".red()
        }
    );
    println!("  Before:");
    println!("{}", learner.boundaries());
}

fn print_summary(learner: &CandidateElimination, result: &TrainingResult, total: usize) {
    println!();
    println!("{}", "Version Space".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    print_boundaries(&result.specific, &result.general);
    println!();

    match result.collapsed_at {
        Some(index) => {
            println!(
                "{} Version space collapsed at example {} of {}; {} examples left unprocessed.",
                "✗".red().bold(),
                (index + 1).to_string().red(),
                total,
                total - result.examples_seen
            );
            println!("  No conjunctive hypothesis is consistent with the data.");
        }
        None => match result.converged() {
            Some(h) => println!(
                "{} Converged to {}",
                "✓".green().bold(),
                h.to_string().green()
            ),
            None => println!(
                "{} Not converged: {} remaining",
                "•".yellow(),
                super::describe_size(&learner.version_space()).cyan()
            ),
        },
    }
}
