pub mod energy;
pub mod food;
pub mod plan;
pub mod profile;

pub use energy::{Bmi, BmiCategory, BmrFormula, MacroTargets};
pub use food::{FoodGroup, FoodItem};
pub use plan::{FoodRole, Guidance, Meal, MealItem, MealType, Plan};
pub use profile::{ActivityLevel, DietaryPattern, Goal, PatientProfile, Restriction, Sex};
