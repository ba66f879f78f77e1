use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{Guidance, Meal, PatientProfile, Plan};
use crate::planner::calculations::{
    bmi, bmr, goal_adjustment, macro_split, round_to, tdee, water_intake_ml,
};
use crate::planner::config::PlannerConfig;
use crate::planner::constants::{EDUCATION_POINTS, HYDRATION_TIPS, SLEEP_HYGIENE_TIPS};
use crate::planner::meals::{allowed_groups, meal_slots};
use crate::planner::restrictions::filter_catalog;
use crate::planner::selection::select_item;

/// Generate a one-day plan, seeding the draws from `config.seed`.
///
/// Identical profile, catalog and config always produce an identical plan.
pub fn generate_plan(
    profile: &PatientProfile,
    catalog: &FoodCatalog,
    config: &PlannerConfig,
) -> Result<Plan> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_plan_with_rng(profile, catalog, config, &mut rng)
}

/// Generate a one-day plan drawing items from a caller-supplied source.
///
/// Only an invalid profile or catalog aborts; per-item gaps are absorbed by
/// the selector's fallbacks and show up as a meal below its target.
pub fn generate_plan_with_rng<R: Rng>(
    profile: &PatientProfile,
    catalog: &FoodCatalog,
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Plan> {
    profile.validate()?;
    catalog.validate()?;
    config.validate()?;

    let body_mass = bmi(profile.weight_kg, profile.height_cm);
    let basal = round_to(bmr(profile, config.formula), 1);
    let expenditure = round_to(tdee(basal, profile.activity_level), 1);
    let target = round_to(goal_adjustment(expenditure, profile.goal), 1);

    let restricted = filter_catalog(catalog, profile);

    let mut meals = Vec::new();
    for slot in meal_slots(profile.meals_per_day) {
        let slot_kcal = target * slot.share;
        let mut meal = Meal::new(slot.name, slot.meal_type, slot_kcal.round());

        for &(role, fraction) in slot.roles() {
            if fraction <= 0.0 {
                continue;
            }
            let groups = allowed_groups(role, profile.dietary_pattern);
            if let Some(item) = select_item(
                &restricted.catalog,
                groups,
                role,
                slot_kcal * fraction,
                config,
                rng,
            ) {
                meal.push(item);
            }
        }

        meals.push(meal);
    }

    let plan = Plan {
        patient_name: profile.name.clone(),
        bmi: body_mass,
        formula: config.formula,
        bmr: basal,
        tdee: expenditure,
        target_calories: target,
        macros: macro_split(target, profile.goal),
        water_ml: water_intake_ml(profile),
        restrictions_honored: restricted.honored,
        seed: config.seed,
        meals,
        guidance: Guidance::new(&HYDRATION_TIPS, &SLEEP_HYGIENE_TIPS, &EDUCATION_POINTS),
    };

    tracing::info!(
        "Plan for '{}': {} meals, {} items, {:.0} of {:.0} kcal",
        plan.patient_name,
        plan.meals.len(),
        plan.item_count(),
        plan.total_calories(),
        plan.target_calories
    );

    Ok(plan)
}
