use crate::models::{FoodRole, MealType};

/// kcal per gram of protein and carbohydrate.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy model
// ─────────────────────────────────────────────────────────────────────────────

/// BMI category upper bounds (exclusive).
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;
pub const BMI_OBESITY_I_BELOW: f64 = 35.0;
pub const BMI_OBESITY_II_BELOW: f64 = 40.0;

/// TDEE multipliers by activity tier.
pub const ACTIVITY_FACTOR_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_FACTOR_LIGHT: f64 = 1.375;
pub const ACTIVITY_FACTOR_MODERATE: f64 = 1.55;
pub const ACTIVITY_FACTOR_HIGH: f64 = 1.725;
pub const ACTIVITY_FACTOR_EXTRA: f64 = 1.9;

/// Calorie multiplier for weight loss.
pub const WEIGHT_LOSS_FACTOR: f64 = 0.8;

/// Calorie multiplier for muscle gain.
pub const MUSCLE_GAIN_FACTOR: f64 = 1.1;

/// Protein/carb/fat shares of daily kcal for loss and maintenance goals.
pub const MACRO_SPLIT_DEFAULT: (f64, f64, f64) = (0.30, 0.45, 0.25);

/// Protein/carb/fat shares of daily kcal for muscle gain.
pub const MACRO_SPLIT_GAIN: (f64, f64, f64) = (0.25, 0.50, 0.25);

/// Water ml per kg of body weight.
pub const WATER_ML_PER_KG_SEDENTARY: f64 = 35.0;
pub const WATER_ML_PER_KG_ACTIVE: f64 = 50.0;

/// Advice printed with every plan.
pub const HYDRATION_TIPS: [&str; 3] = [
    "Spread water intake across the whole day.",
    "Use a marked bottle to track the daily volume.",
    "Check urine colour: the lighter, the better hydrated.",
];

pub const SLEEP_HYGIENE_TIPS: [&str; 5] = [
    "Keep fixed times for going to bed and waking up.",
    "Avoid screens and blue light for at least an hour before bed.",
    "Cut caffeine after mid-afternoon.",
    "Build a relaxing pre-sleep routine (light reading, breathing, stretching).",
    "Sleep in a dark, quiet and cool room.",
];

pub const EDUCATION_POINTS: [&str; 4] = [
    "Prefer fresh and minimally processed foods.",
    "Include fruit and vegetables in every main meal.",
    "Eat slowly and respect hunger and fullness cues.",
    "Avoid extreme diets without professional follow-up.",
];

// ─────────────────────────────────────────────────────────────────────────────
// Meal structure
// ─────────────────────────────────────────────────────────────────────────────

/// Supported meals-per-day range; requests outside are clamped.
pub const MIN_MEALS_PER_DAY: u8 = 3;
pub const MAX_MEALS_PER_DAY: u8 = 6;

/// (name, type, share of daily kcal) for each supported meal count.
pub const SLOTS_3: [(&str, MealType, f64); 3] = [
    ("Breakfast", MealType::Breakfast, 0.25),
    ("Lunch", MealType::Lunch, 0.40),
    ("Dinner", MealType::Dinner, 0.35),
];

pub const SLOTS_4: [(&str, MealType, f64); 4] = [
    ("Breakfast", MealType::Breakfast, 0.22),
    ("Lunch", MealType::Lunch, 0.38),
    ("Afternoon snack", MealType::Snack, 0.15),
    ("Dinner", MealType::Dinner, 0.25),
];

pub const SLOTS_5: [(&str, MealType, f64); 5] = [
    ("Breakfast", MealType::Breakfast, 0.20),
    ("Morning snack", MealType::Snack, 0.10),
    ("Lunch", MealType::Lunch, 0.35),
    ("Afternoon snack", MealType::Snack, 0.15),
    ("Dinner", MealType::Dinner, 0.20),
];

pub const SLOTS_6: [(&str, MealType, f64); 6] = [
    ("Breakfast", MealType::Breakfast, 0.18),
    ("Morning snack", MealType::Snack, 0.10),
    ("Lunch", MealType::Lunch, 0.32),
    ("Afternoon snack", MealType::Snack, 0.12),
    ("Dinner", MealType::Dinner, 0.18),
    ("Evening snack", MealType::LightSnack, 0.10),
];

/// Share of a meal's kcal per role. Roles with zero share are omitted.
pub const ROLES_BREAKFAST: [(FoodRole, f64); 3] = [
    (FoodRole::Carb, 0.40),
    (FoodRole::Protein, 0.30),
    (FoodRole::Fruit, 0.30),
];

pub const ROLES_LUNCH: [(FoodRole, f64); 3] = [
    (FoodRole::Carb, 0.40),
    (FoodRole::Protein, 0.35),
    (FoodRole::Vegetable, 0.25),
];

pub const ROLES_DINNER: [(FoodRole, f64); 3] = [
    (FoodRole::Carb, 0.25),
    (FoodRole::Protein, 0.35),
    (FoodRole::Vegetable, 0.40),
];

pub const ROLES_SNACK: [(FoodRole, f64); 3] = [
    (FoodRole::Carb, 0.25),
    (FoodRole::Protein, 0.25),
    (FoodRole::Fruit, 0.50),
];

pub const ROLES_LIGHT_SNACK: [(FoodRole, f64); 3] = [
    (FoodRole::Carb, 0.20),
    (FoodRole::Protein, 0.30),
    (FoodRole::Fruit, 0.50),
];

// ─────────────────────────────────────────────────────────────────────────────
// Item selection defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Default seed for reproducible draws.
pub const DEFAULT_SEED: u64 = 42;

/// Portions are rounded to multiples of this many grams.
pub const PORTION_STEP_G: f64 = 5.0;

/// Smallest portion ever proposed.
pub const MIN_PORTION_G: f64 = 10.0;

/// Substitutes must be within this relative distance in kcal/100g.
pub const SUBSTITUTION_TOLERANCE: f64 = 0.30;

/// Maximum substitutes listed per item.
pub const MAX_SUBSTITUTIONS: usize = 5;
