use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Estimate energy needs and build a restriction-aware daily meal plan.
#[derive(Parser, Debug)]
#[command(name = "meal_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (CSV or JSON).
    #[arg(short, long, default_value = "foods.csv")]
    pub catalog: PathBuf,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a one-day meal plan.
    Plan {
        /// Patient profile JSON; prompts interactively when omitted.
        #[arg(short, long)]
        profile: Option<PathBuf>,

        /// Planner configuration JSON.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for reproducible item selection (overrides the config file).
        #[arg(long)]
        seed: Option<u64>,

        /// BMR formula: mifflin, harris-benedict, owen, cunningham.
        #[arg(long)]
        formula: Option<String>,

        /// Print the plan as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List catalog rows.
    Catalog {
        /// Only show one food group (e.g. cereal, fruit, legume).
        #[arg(short, long)]
        group: Option<String>,

        /// Only show rows compatible with this patient profile JSON.
        #[arg(short, long)]
        profile: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: None,
            config: None,
            seed: None,
            formula: None,
            json: false,
        }
    }
}
