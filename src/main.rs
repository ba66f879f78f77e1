use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_plan_engine::catalog::{FoodCatalog, load_catalog};
use meal_plan_engine::cli::{Cli, Command};
use meal_plan_engine::error::Result;
use meal_plan_engine::interface::{collect_profile, display_food_list, display_plan};
use meal_plan_engine::models::{BmrFormula, FoodGroup, PatientProfile};
use meal_plan_engine::planner::{PlannerConfig, filter_catalog, generate_plan};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            profile,
            config,
            seed,
            formula,
            json,
        } => cmd_plan(&cli.catalog, profile, config, seed, formula, json),
        Command::Catalog { group, profile } => cmd_catalog(&cli.catalog, group, profile),
    }
}

fn load_profile(path: &Path) -> Result<PatientProfile> {
    let content = fs::read_to_string(path)?;
    let profile: PatientProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}

fn open_catalog(path: &Path) -> Result<Option<FoodCatalog>> {
    if !path.exists() {
        eprintln!("Food catalog not found: {}", path.display());
        eprintln!("Pass --catalog <file> with a CSV or JSON food table.");
        return Ok(None);
    }
    load_catalog(path).map(Some)
}

/// Generate and display a meal plan.
fn cmd_plan(
    catalog_path: &Path,
    profile_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    formula: Option<String>,
    json: bool,
) -> Result<()> {
    let Some(catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let mut config = match config_path {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(seed) = seed {
        config.seed = seed;
    }
    if let Some(id) = formula {
        config.formula = BmrFormula::parse(&id);
    }

    let profile = match profile_path {
        Some(path) => load_profile(&path)?,
        None => {
            println!("Loaded {} foods", catalog.len());
            println!();
            let foods: Vec<_> = catalog.iter().collect();
            collect_profile(&foods)?
        }
    };

    let plan = generate_plan(&profile, &catalog, &config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    Ok(())
}

/// List catalog rows, optionally narrowed by group and profile.
fn cmd_catalog(
    catalog_path: &Path,
    group: Option<String>,
    profile_path: Option<PathBuf>,
) -> Result<()> {
    let Some(mut catalog) = open_catalog(catalog_path)? else {
        return Ok(());
    };

    let mut title = "Food catalog".to_string();

    if let Some(path) = profile_path {
        let profile = load_profile(&path)?;
        let outcome = filter_catalog(&catalog, &profile);
        if !outcome.honored {
            println!(
                "Restrictions for '{}' exclude every food; showing the full catalog.",
                profile.name
            );
        }
        title = format!("Foods for {}", profile.name);
        catalog = outcome.catalog;
    }

    let foods = match group {
        Some(label) => {
            let group = FoodGroup::from_label(&label);
            title = format!("{} ({})", title, group.label());
            catalog.in_groups(&[group])
        }
        None => catalog.iter().collect(),
    };

    display_food_list(&foods, &title);

    for (group, count) in catalog.group_counts() {
        println!("  {:<15} {}", group, count);
    }

    Ok(())
}
