use crate::models::{
    ActivityLevel, Bmi, BmiCategory, BmrFormula, Goal, MacroTargets, PatientProfile, Sex,
};
use crate::planner::constants::*;

/// Round to `decimals` decimal places.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Classify a BMI value. Thresholds are exclusive upper bounds, so 18.5 is
/// normal and 40.0 is obesity class III.
pub fn classify_bmi(value: f64) -> BmiCategory {
    if value < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if value < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if value < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else if value < BMI_OBESITY_I_BELOW {
        BmiCategory::ObesityI
    } else if value < BMI_OBESITY_II_BELOW {
        BmiCategory::ObesityII
    } else {
        BmiCategory::ObesityIII
    }
}

/// Body mass index from kg and cm, rounded to one decimal.
///
/// The category is derived from the rounded value so display and class agree.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Bmi {
    let height_m = height_cm / 100.0;
    let value = if height_m > 0.0 {
        round_to(weight_kg / (height_m * height_m), 1)
    } else {
        0.0
    };
    Bmi {
        value,
        category: classify_bmi(value),
    }
}

/// Mifflin-St Jeor (1990): 10·W + 6.25·H − 5·A + (5 | −161).
pub fn mifflin_st_jeor(profile: &PatientProfile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age as f64;
    match profile.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

/// Harris-Benedict as revised by Roza & Shizgal (1984).
pub fn harris_benedict(profile: &PatientProfile) -> f64 {
    let (w, h, a) = (profile.weight_kg, profile.height_cm, profile.age as f64);
    match profile.sex {
        Sex::Male => 88.362 + 13.397 * w + 4.799 * h - 5.677 * a,
        Sex::Female => 447.593 + 9.247 * w + 3.098 * h - 4.330 * a,
    }
}

/// Owen (1986/1987), weight only.
pub fn owen(profile: &PatientProfile) -> f64 {
    match profile.sex {
        Sex::Male => 879.0 + 10.2 * profile.weight_kg,
        Sex::Female => 795.0 + 7.18 * profile.weight_kg,
    }
}

/// Cunningham (1980): 500 + 22·LBM.
///
/// Without a body-fat percentage there is no lean mass; Mifflin-St Jeor is used.
pub fn cunningham(profile: &PatientProfile) -> f64 {
    match profile.lean_mass_kg() {
        Some(lbm) => 500.0 + 22.0 * lbm,
        None => mifflin_st_jeor(profile),
    }
}

/// Basal metabolic rate in kcal/day.
pub fn bmr(profile: &PatientProfile, formula: BmrFormula) -> f64 {
    match formula {
        BmrFormula::MifflinStJeor => mifflin_st_jeor(profile),
        BmrFormula::HarrisBenedict => harris_benedict(profile),
        BmrFormula::Owen => owen(profile),
        BmrFormula::Cunningham => cunningham(profile),
    }
}

/// TDEE multiplier for an activity tier.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => ACTIVITY_FACTOR_SEDENTARY,
        ActivityLevel::Light => ACTIVITY_FACTOR_LIGHT,
        ActivityLevel::Moderate => ACTIVITY_FACTOR_MODERATE,
        ActivityLevel::High => ACTIVITY_FACTOR_HIGH,
        ActivityLevel::Extra => ACTIVITY_FACTOR_EXTRA,
    }
}

/// Total daily energy expenditure.
pub fn tdee(bmr: f64, level: ActivityLevel) -> f64 {
    bmr * activity_factor(level)
}

/// Calorie multiplier for a goal.
pub fn goal_factor(goal: Goal) -> f64 {
    match goal {
        Goal::WeightLoss => WEIGHT_LOSS_FACTOR,
        Goal::Maintenance => 1.0,
        Goal::MuscleGain => MUSCLE_GAIN_FACTOR,
    }
}

/// Goal-adjusted daily calorie target.
pub fn goal_adjustment(tdee: f64, goal: Goal) -> f64 {
    tdee * goal_factor(goal)
}

/// Split daily kcal into grams of protein, carbohydrate and fat.
///
/// Muscle gain uses 25/50/25, every other goal 30/45/25. Grams have one decimal.
pub fn macro_split(kcal: f64, goal: Goal) -> MacroTargets {
    let (protein, carb, fat) = match goal {
        Goal::MuscleGain => MACRO_SPLIT_GAIN,
        Goal::WeightLoss | Goal::Maintenance => MACRO_SPLIT_DEFAULT,
    };
    MacroTargets {
        protein_g: round_to(kcal * protein / KCAL_PER_G_PROTEIN, 1),
        carb_g: round_to(kcal * carb / KCAL_PER_G_CARB, 1),
        fat_g: round_to(kcal * fat / KCAL_PER_G_FAT, 1),
    }
}

/// Daily water target in ml.
pub fn water_intake_ml(profile: &PatientProfile) -> u32 {
    let per_kg = match profile.activity_level {
        ActivityLevel::Sedentary => WATER_ML_PER_KG_SEDENTARY,
        _ => WATER_ML_PER_KG_ACTIVE,
    };
    (profile.weight_kg * per_kg).max(0.0) as u32
}
