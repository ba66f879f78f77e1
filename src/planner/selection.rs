use std::collections::HashSet;

use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::models::{FoodGroup, FoodItem, FoodRole, MealItem};
use crate::planner::config::PlannerConfig;

/// Grams needed to deliver `kcal_target`, rounded to the portion step and
/// never below the minimum portion.
pub fn portion_grams(kcal_target: f64, kcal_per_100g: f64, config: &PlannerConfig) -> f64 {
    let step = config.portion_step_g;
    let floor = (config.min_portion_g / step).ceil() * step;
    if kcal_per_100g <= 0.0 {
        return floor;
    }

    let raw = kcal_target / (kcal_per_100g / 100.0);
    let rounded = (raw / step).round() * step;
    rounded.max(floor)
}

/// Names of items in `pool` whose energy density lies within the configured
/// tolerance of `chosen`, deduplicated by name and capped.
pub fn find_substitutions(
    pool: &[&FoodItem],
    chosen: &FoodItem,
    config: &PlannerConfig,
) -> Vec<String> {
    let reference = chosen.kcal_per_100g;
    let window = reference * config.substitution_tolerance;

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(chosen.name.to_lowercase());

    pool.iter()
        .filter(|f| (f.kcal_per_100g - reference).abs() <= window)
        .filter(|f| seen.insert(f.name.to_lowercase()))
        .take(config.max_substitutions)
        .map(|f| f.name.clone())
        .collect()
}

/// Pick an item for one role of one meal and size its portion.
///
/// 1. Drop items without positive energy
/// 2. Restrict to `allowed` groups, or use the whole catalog if none match
/// 3. Draw one item from `rng`
/// 4. Size the portion and collect substitutes from the same pool
///
/// Returns `None` only when no catalog row has usable energy.
pub fn select_item<R: Rng>(
    catalog: &FoodCatalog,
    allowed: &[FoodGroup],
    role: FoodRole,
    kcal_target: f64,
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<MealItem> {
    let usable = catalog.with_energy();
    if usable.is_empty() {
        tracing::debug!("No usable food for {} role, omitting", role.label());
        return None;
    }

    let in_group: Vec<&FoodItem> = usable
        .iter()
        .copied()
        .filter(|f| allowed.contains(&f.group))
        .collect();

    let pool = if in_group.is_empty() {
        tracing::debug!(
            "No food in {:?} for {} role, drawing from the whole catalog",
            allowed,
            role.label()
        );
        usable
    } else {
        in_group
    };

    let chosen = pool[rng.gen_range(0..pool.len())];
    let grams = portion_grams(kcal_target, chosen.kcal_per_100g, config);
    let calories = chosen.kcal_for(grams).round();
    let substitutions = find_substitutions(&pool, chosen, config);

    tracing::debug!(
        "{} role: {} g of {} ({} kcal, target {:.1})",
        role.label(),
        grams,
        chosen.debug_string(),
        calories,
        kcal_target
    );

    Some(MealItem::new(
        chosen.clone(),
        role,
        grams,
        calories,
        substitutions,
    ))
}
