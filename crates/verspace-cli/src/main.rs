//! Verspace CLI - Version-space concept learning from the command line.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use commands::train::TrainArgs;

#[derive(Parser)]
#[command(name = "verspace")]
#[command(author, version, about = "Verspace - Candidate-Elimination concept learning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Verspace project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Learn S and G boundaries from an ARFF dataset
    Train {
        /// ARFF file with nominal attributes
        file: String,

        /// Class attribute name (default: last attribute)
        #[arg(short, long)]
        class: Option<String>,

        /// Class value treated as positive
        #[arg(short, long)]
        positive: Option<String>,

        /// Print the boundaries before and after every example
        #[arg(short, long)]
        trace: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not save the trained model
        #[arg(long)]
        no_save: bool,
    },

    /// Classify comma-separated attribute values with the saved model
    Classify {
        /// Attribute values, e.g. "sunny,warm"
        values: String,

        /// Print the prediction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the saved model
    Show,

    /// Learn one concept per class value
    Concepts {
        /// ARFF file with nominal attributes
        file: String,

        /// Class attribute name (default: last attribute)
        #[arg(short, long)]
        class: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Color preference from the config file. A config that fails to load is
/// reported and colors stay on.
fn color_enabled(loaded: Result<config::Config>) -> bool {
    match loaded {
        Ok(config) => config.output.color,
        Err(e) => {
            warn!("ignoring unreadable config: {:#}", e);
            true
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.no_color || !color_enabled(config::Config::load()) {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Train {
            file,
            class,
            positive,
            trace,
            json,
            no_save,
        } => commands::train::run(TrainArgs {
            file,
            class,
            positive,
            trace,
            json,
            no_save,
        }),
        Commands::Classify { values, json } => commands::classify::run(&values, json),
        Commands::Show => commands::show::run(),
        Commands::Concepts { file, class } => commands::concepts::run(&file, class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_config() {
        let config = config::Config::parse("[output]\ncolor = false\n");
        assert!(!color_enabled(config));
    }

    #[test]
    fn broken_config_keeps_color_on() {
        let config = config::Config::parse("[output\ncolor = ");
        assert!(config.is_err());
        assert!(color_enabled(config));
    }
}
