//! CLI command implementations.

pub mod classify;
pub mod concepts;
pub mod init;
pub mod show;
pub mod train;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tracing::debug;
use verspace::prelude::*;

use crate::config::current_model_path;

/// Load an ARFF file and select its class attribute (last when unnamed).
pub fn load_dataset(file: &str, class: Option<&str>) -> Result<Dataset> {
    let path = Path::new(file);
    if !path.exists() {
        bail!("Path does not exist: {}", path.display());
    }
    let data = load_arff(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let data = match class {
        Some(name) => data.with_class_attribute(name)?,
        None => data.with_last_as_class()?,
    };
    Ok(data)
}

pub fn save_model(learner: &CandidateElimination) -> Result<()> {
    let path = current_model_path()?;
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let json = learner.snapshot().to_json().context("Failed to serialize model")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write model: {}", path.display()))?;
    debug!("saved model to {}", path.display());
    Ok(())
}

pub fn load_model() -> Result<CandidateElimination> {
    let path = current_model_path()?;
    if !path.exists() {
        bail!("No trained model found. Run {} first.", "verspace train".cyan());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read model: {}", path.display()))?;
    let snapshot = ModelSnapshot::from_json(&text)
        .with_context(|| format!("Failed to parse model: {}", path.display()))?;
    debug!(
        "loaded model from {} ({} examples seen)",
        path.display(),
        snapshot.examples_seen
    );
    Ok(CandidateElimination::from_snapshot(snapshot)?)
}

/// Class value printed for a prediction.
///
/// Negative predictions use the configured negative label when the class
/// domain has it, else the first value that is not the positive label.
pub fn class_name(learner: &CandidateElimination, label: Label, negative: &str) -> String {
    if label.is_positive() {
        return learner.positive_label().to_string();
    }
    let Ok(class) = learner.schema().class_attribute() else {
        return negative.to_string();
    };
    if class.contains(negative) {
        return negative.to_string();
    }
    class
        .values
        .iter()
        .find(|v| v.as_str() != learner.positive_label())
        .cloned()
        .unwrap_or_else(|| negative.to_string())
}

/// Largest hypothesis space whose members are counted for display.
const ENUMERATION_LIMIT: u64 = 100_000;

/// "N hypotheses", or the boundary sizes when enumeration would be too slow.
pub fn describe_size(space: &VersionSpace<'_>) -> String {
    if space.space_size() <= ENUMERATION_LIMIT {
        format!("{} hypotheses", space.members().len())
    } else {
        "too many hypotheses to count".to_string()
    }
}

/// Print S and G, one hypothesis per line.
pub fn print_boundaries(specific: &[Hypothesis], general: &[Hypothesis]) {
    println!("{}", "S (most specific)".blue().bold());
    print_set(specific);
    println!("{}", "G (most general)".blue().bold());
    print_set(general);
}

fn print_set(set: &[Hypothesis]) {
    if set.is_empty() {
        println!("  {}", "[empty]".red());
    }
    for h in set {
        println!("  {}", h.to_string().cyan());
    }
}
