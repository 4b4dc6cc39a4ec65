//! Set up a directory for training: `verspace.toml` plus the model store.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE, DATA_DIR};

pub fn run(path: Option<String>) -> Result<()> {
    let base = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    println!("{} Preparing {} for Verspace...", "→".blue(), base.display());

    let config = write_config(&base)?;
    let store = prepare_model_store(&base)?;

    println!();
    println!(
        "Learning '{}' against everything else; negatives print as '{}'.",
        config.learner.positive_label.cyan(),
        config.learner.negative_label.cyan()
    );
    match &config.learner.class_attribute {
        Some(name) => println!("Class attribute: {}", name.cyan()),
        None => println!("Class attribute: last attribute of each dataset"),
    }
    if store.join("current.json").exists() {
        println!("A trained model is already saved; `verspace show` prints it.");
    }

    println!();
    println!("Workflow:");
    println!(
        "  {} verspace train <data.arff> --trace   watch S and G move per example",
        "1.".blue()
    );
    println!(
        "  {} verspace show                        boundaries and remaining hypotheses",
        "2.".blue()
    );
    println!(
        "  {} verspace classify <v1,v2,...>        positive only once S and G meet",
        "3.".blue()
    );
    println!(
        "  {} verspace concepts <data.arff>        one concept per class value",
        "4.".blue()
    );

    Ok(())
}

/// Write a default config unless one exists; return the config in effect.
fn write_config(base: &Path) -> Result<Config> {
    let path = base.join(CONFIG_FILE);
    if path.exists() {
        println!("  {} {} already exists", "•".yellow(), path.display());
        return Config::load_from(&path);
    }
    let config = Config::default();
    config.save(&path)?;
    println!("  {} Created {}", "✓".green(), path.display());
    Ok(config)
}

/// Create the directory holding the saved model, ignored by git.
fn prepare_model_store(base: &Path) -> Result<PathBuf> {
    let store = base.join(DATA_DIR);
    std::fs::create_dir_all(&store)
        .with_context(|| format!("Failed to create {}", store.display()))?;

    let ignore = store.join(".gitignore");
    if !ignore.exists() {
        std::fs::write(&ignore, "current.json\n")
            .with_context(|| format!("Failed to write {}", ignore.display()))?;
    }
    println!("  {} Model store at {}", "✓".green(), store.display());
    Ok(store)
}
