use crate::models::{DietaryPattern, FoodGroup, FoodRole, MealType};
use crate::planner::constants::*;

/// A named meal at a fixed share of the daily calorie budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealSlot {
    pub name: &'static str,
    pub meal_type: MealType,
    /// Fraction of daily kcal; all slots of a layout sum to 1.0.
    pub share: f64,
}

impl MealSlot {
    /// Role → fraction of this slot's kcal.
    pub fn roles(&self) -> &'static [(FoodRole, f64)] {
        role_composition(self.meal_type)
    }
}

/// Ordered slots for a meals-per-day request, clamped to the supported range.
pub fn meal_slots(meals_per_day: u8) -> Vec<MealSlot> {
    let table: &[(&'static str, MealType, f64)] =
        match meals_per_day.clamp(MIN_MEALS_PER_DAY, MAX_MEALS_PER_DAY) {
            3 => &SLOTS_3,
            4 => &SLOTS_4,
            5 => &SLOTS_5,
            _ => &SLOTS_6,
        };

    table
        .iter()
        .map(|&(name, meal_type, share)| MealSlot {
            name,
            meal_type,
            share,
        })
        .collect()
}

/// Share of a meal's kcal assigned to each role for a meal type.
pub fn role_composition(meal_type: MealType) -> &'static [(FoodRole, f64)] {
    match meal_type {
        MealType::Breakfast => &ROLES_BREAKFAST,
        MealType::Lunch => &ROLES_LUNCH,
        MealType::Dinner => &ROLES_DINNER,
        MealType::Snack => &ROLES_SNACK,
        MealType::LightSnack => &ROLES_LIGHT_SNACK,
    }
}

/// Catalog groups that may fill a role under a dietary pattern.
///
/// Vegetarian protein is drawn from plant sources only.
pub fn allowed_groups(role: FoodRole, pattern: DietaryPattern) -> &'static [FoodGroup] {
    match role {
        FoodRole::Carb => &[FoodGroup::Cereal, FoodGroup::Tuber],
        FoodRole::Fruit => &[FoodGroup::Fruit],
        FoodRole::Vegetable => &[FoodGroup::Vegetable, FoodGroup::Legume],
        FoodRole::Protein => match pattern {
            DietaryPattern::Omnivore => &[
                FoodGroup::AnimalProtein,
                FoodGroup::PlantProtein,
                FoodGroup::Legume,
            ],
            DietaryPattern::Vegetarian | DietaryPattern::Vegan => {
                &[FoodGroup::PlantProtein, FoodGroup::Legume]
            }
        },
    }
}
