use std::collections::BTreeSet;

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{DietError, Result};
use crate::models::profile::{MAX_AGE, MIN_AGE};
use crate::models::{
    ActivityLevel, DietaryPattern, FoodItem, Goal, PatientProfile, Restriction, Sex,
};
use crate::planner::{MAX_MEALS_PER_DAY, MIN_MEALS_PER_DAY};

/// Minimum similarity for a fuzzy food-name suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("'{}' is not a number", input)))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(DietError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

/// Prompt for a whole number within `min..=max`.
fn prompt_bounded(prompt: &str, default: u32, min: u32, max: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("{} ({}-{})", prompt, min, max))
        .default(default.to_string())
        .interact_text()?;

    let value: u32 = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("'{}' is not a whole number", input)))?;

    if !(min..=max).contains(&value) {
        return Err(DietError::InvalidInput(format!(
            "{} must be between {} and {}",
            prompt, min, max
        )));
    }
    Ok(value)
}

fn prompt_choice<T: Copy>(
    prompt: &str,
    options: &[T],
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(label).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection])
}

/// Prompt for clinical restrictions (multi-select).
pub fn prompt_restrictions() -> Result<BTreeSet<Restriction>> {
    let labels: Vec<&str> = Restriction::ALL.iter().map(|r| r.label()).collect();
    let chosen = MultiSelect::new()
        .with_prompt("Clinical restrictions (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;
    Ok(chosen.into_iter().map(|i| Restriction::ALL[i]).collect())
}

/// Prompt for disliked foods with fuzzy matching against the catalog.
pub fn prompt_dislikes(foods: &[&FoodItem]) -> Result<Vec<String>> {
    let mut dislikes = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a disliked food (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let needle = input.to_lowercase();

        // Substring hits are honored as typed
        if foods.iter().any(|f| f.name.to_lowercase().contains(&needle)) {
            dislikes.push(input.to_string());
            println!("Added: {}", input);
            continue;
        }

        let mut candidates: Vec<(&FoodItem, f64)> = foods
            .iter()
            .map(|f| (*f, jaro_winkler(&f.name.to_lowercase(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates.dedup_by(|a, b| a.0.name.eq_ignore_ascii_case(&b.0.name));

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let food = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", food.name))
                .default(true)
                .interact()?;

            if confirm {
                dislikes.push(food.name.clone());
                println!("Added: {}", food.name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(f, _)| f.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                dislikes.push(options[selection].clone());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(dislikes)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a complete patient profile interactively.
pub fn collect_profile(foods: &[&FoodItem]) -> Result<PatientProfile> {
    let name: String = Input::new()
        .with_prompt("Patient name")
        .interact_text()?;

    let age = prompt_bounded("Age", 30, MIN_AGE, MAX_AGE)?;
    let sex = prompt_choice("Sex", &[Sex::Male, Sex::Female], |s| match s {
        Sex::Male => "male",
        Sex::Female => "female",
    })?;
    let weight_kg = prompt_number("Weight (kg)", "70")?;
    let height_cm = prompt_number("Height (cm)", "170")?;
    let activity_level =
        prompt_choice("Activity level", &ActivityLevel::ALL, ActivityLevel::label)?;
    let goal = prompt_choice("Goal", &Goal::ALL, Goal::label)?;
    let meals_per_day = prompt_bounded(
        "Meals per day",
        4,
        MIN_MEALS_PER_DAY as u32,
        MAX_MEALS_PER_DAY as u32,
    )? as u8;
    let dietary_pattern =
        prompt_choice("Dietary pattern", &DietaryPattern::ALL, DietaryPattern::label)?;
    let restrictions = prompt_restrictions()?;

    let body_fat_pct = if prompt_yes_no("Is body-fat percentage known?", false)? {
        Some(prompt_number("Body fat (%)", "20")?)
    } else {
        None
    };

    let dislikes = if prompt_yes_no("Any disliked foods?", false)? {
        prompt_dislikes(foods)?
    } else {
        Vec::new()
    };

    let profile = PatientProfile {
        name: name.trim().to_string(),
        age,
        sex,
        weight_kg,
        height_cm,
        activity_level,
        goal,
        meals_per_day,
        dietary_pattern,
        restrictions,
        dislikes,
        body_fat_pct,
    };
    profile.validate()?;
    Ok(profile)
}
