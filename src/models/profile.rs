use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};

/// Biological sex; selects the formula constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

/// Ordinal activity tier mapped to a TDEE multiplier.
///
/// Deserializes through [`ActivityLevel::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    High,
    Extra,
}

impl From<String> for ActivityLevel {
    fn from(label: String) -> Self {
        ActivityLevel::from_label(&label)
    }
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::Extra,
    ];

    /// Resolve a label at the input boundary. Unknown labels fall back to the
    /// lowest tier.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" | "lightly_active" => ActivityLevel::Light,
            "moderate" | "moderately_active" => ActivityLevel::Moderate,
            "high" | "intense" | "very_active" => ActivityLevel::High,
            "extra" | "extra_active" => ActivityLevel::Extra,
            other => {
                tracing::warn!("Unknown activity level '{}', using sedentary", other);
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
            ActivityLevel::Extra => "extra",
        }
    }
}

/// Stated goal driving the calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[serde(alias = "fat_loss")]
    WeightLoss,
    #[default]
    Maintenance,
    #[serde(alias = "hypertrophy")]
    MuscleGain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::Maintenance, Goal::MuscleGain];

    pub fn label(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight loss",
            Goal::Maintenance => "maintenance",
            Goal::MuscleGain => "muscle gain",
        }
    }
}

/// Dietary pattern, ordered by strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPattern {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietaryPattern {
    pub const ALL: [DietaryPattern; 3] = [
        DietaryPattern::Omnivore,
        DietaryPattern::Vegetarian,
        DietaryPattern::Vegan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DietaryPattern::Omnivore => "omnivore",
            DietaryPattern::Vegetarian => "vegetarian",
            DietaryPattern::Vegan => "vegan",
        }
    }
}

/// Clinical restriction flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Restriction {
    Celiac,
    #[serde(alias = "diabetes")]
    Diabetic,
    #[serde(alias = "hypertension")]
    Hypertensive,
    #[serde(alias = "lactose_intolerance")]
    LactoseIntolerant,
    EggAllergy,
    NutAllergy,
}

impl Restriction {
    pub const ALL: [Restriction; 6] = [
        Restriction::Celiac,
        Restriction::Diabetic,
        Restriction::Hypertensive,
        Restriction::LactoseIntolerant,
        Restriction::EggAllergy,
        Restriction::NutAllergy,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Restriction::Celiac => "celiac",
            Restriction::Diabetic => "diabetic",
            Restriction::Hypertensive => "hypertensive",
            Restriction::LactoseIntolerant => "lactose intolerant",
            Restriction::EggAllergy => "egg allergy",
            Restriction::NutAllergy => "nut allergy",
        }
    }
}

/// Validated patient data consumed read-only by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub weight_kg: f64,
    pub height_cm: f64,

    #[serde(default)]
    pub activity_level: ActivityLevel,

    #[serde(default)]
    pub goal: Goal,

    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u8,

    #[serde(default)]
    pub dietary_pattern: DietaryPattern,

    #[serde(default)]
    pub restrictions: BTreeSet<Restriction>,

    /// Free-text fragments; catalog rows whose name contains one are dropped.
    #[serde(default)]
    pub dislikes: Vec<String>,

    /// Enables lean-mass formulas when present.
    #[serde(default)]
    pub body_fat_pct: Option<f64>,
}

fn default_meals_per_day() -> u8 {
    4
}

/// Age bounds accepted by the energy formulas.
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

impl PatientProfile {
    pub fn has_restriction(&self, restriction: Restriction) -> bool {
        self.restrictions.contains(&restriction)
    }

    /// Lean body mass in kg, when body fat is known.
    pub fn lean_mass_kg(&self) -> Option<f64> {
        self.body_fat_pct
            .map(|pct| self.weight_kg * (1.0 - pct / 100.0))
    }

    /// Reject values that would make BMI/BMR nonsensical.
    pub fn validate(&self) -> Result<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(DietError::InvalidProfile(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(DietError::InvalidProfile(format!(
                "height must be positive, got {}",
                self.height_cm
            )));
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(DietError::InvalidProfile(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, self.age
            )));
        }
        if self.meals_per_day == 0 {
            return Err(DietError::InvalidProfile(
                "meals per day must be at least 1".to_string(),
            ));
        }
        if let Some(pct) = self.body_fat_pct {
            if !pct.is_finite() || pct <= 0.0 || pct >= 100.0 {
                return Err(DietError::InvalidProfile(format!(
                    "body fat percentage must be within (0, 100), got {}",
                    pct
                )));
            }
        }
        Ok(())
    }
}
