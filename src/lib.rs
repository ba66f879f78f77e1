pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{DietError, Result};
pub use models::{FoodItem, Meal, MealItem, PatientProfile, Plan};
pub use planner::{PlannerConfig, generate_plan};
