pub mod assembler;
pub mod calculations;
pub mod config;
pub mod constants;
pub mod meals;
pub mod restrictions;
pub mod selection;

pub use assembler::{generate_plan, generate_plan_with_rng};
pub use calculations::{
    activity_factor, bmi, bmr, classify_bmi, goal_adjustment, macro_split, tdee, water_intake_ml,
};
pub use config::{PlannerConfig, derive_seed};
pub use constants::*;
pub use meals::{MealSlot, allowed_groups, meal_slots, role_composition};
pub use restrictions::{RestrictionOutcome, filter_catalog, is_allowed};
pub use selection::{find_substitutions, portion_grams, select_item};
