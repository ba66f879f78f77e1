use serde::{Deserialize, Serialize};

use crate::models::energy::{Bmi, BmrFormula, MacroTargets};
use crate::models::food::FoodItem;

/// Nutritional function an item serves within a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodRole {
    Carb,
    Protein,
    Fruit,
    Vegetable,
}

impl FoodRole {
    pub fn label(&self) -> &'static str {
        match self {
            FoodRole::Carb => "carb",
            FoodRole::Protein => "protein",
            FoodRole::Fruit => "fruit",
            FoodRole::Vegetable => "vegetable",
        }
    }
}

/// Meal type; selects the role composition of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    LightSnack,
}

/// A single portion within a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealItem {
    /// Catalog row the portion was cut from.
    pub food: FoodItem,

    pub role: FoodRole,

    /// Portion size, a multiple of the configured step.
    pub grams: f64,

    /// Calories from this portion, rounded to an integer.
    pub calories: f64,

    /// Names of interchangeable items with similar energy density.
    pub substitutions: Vec<String>,
}

impl MealItem {
    pub fn new(
        food: FoodItem,
        role: FoodRole,
        grams: f64,
        calories: f64,
        substitutions: Vec<String>,
    ) -> Self {
        Self {
            food,
            role,
            grams,
            calories,
            substitutions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub meal_type: MealType,
    pub target_calories: f64,
    /// Sum of item calories; may differ from the target by portion rounding.
    pub calories: f64,
    pub items: Vec<MealItem>,
}

impl Meal {
    pub fn new(name: impl Into<String>, meal_type: MealType, target_calories: f64) -> Self {
        Self {
            name: name.into(),
            meal_type,
            target_calories,
            calories: 0.0,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, item: MealItem) {
        self.calories += item.calories;
        self.items.push(item);
    }
}

/// Static lifestyle advice attached to a plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Guidance {
    pub hydration: Vec<String>,
    pub sleep_hygiene: Vec<String>,
    pub education: Vec<String>,
}

impl Guidance {
    pub fn new(hydration: &[&str], sleep_hygiene: &[&str], education: &[&str]) -> Self {
        let owned = |lines: &[&str]| lines.iter().map(|l| l.to_string()).collect();
        Self {
            hydration: owned(hydration),
            sleep_hygiene: owned(sleep_hygiene),
            education: owned(education),
        }
    }
}

/// A complete single-day plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub patient_name: String,
    pub bmi: Bmi,
    pub formula: BmrFormula,
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub macros: MacroTargets,
    pub water_ml: u32,
    /// False when the restriction filter had to fall back to the full catalog.
    pub restrictions_honored: bool,
    pub seed: u64,
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub guidance: Guidance,
}

impl Plan {
    /// Calories actually delivered across all meals.
    pub fn total_calories(&self) -> f64 {
        self.meals.iter().map(|m| m.calories).sum()
    }

    pub fn item_count(&self) -> usize {
        self.meals.iter().map(|m| m.items.len()).sum()
    }
}
