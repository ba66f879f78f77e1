#[macro_use]
extern crate assert_float_eq;

use std::collections::BTreeSet;

use meal_plan_engine::models::{
    ActivityLevel, BmiCategory, BmrFormula, DietaryPattern, Goal, PatientProfile, Sex,
};
use meal_plan_engine::planner::{
    bmi, bmr, classify_bmi, goal_adjustment, macro_split, meal_slots, role_composition, tdee,
};

fn reference_profile() -> PatientProfile {
    PatientProfile {
        name: "Reference".to_string(),
        age: 30,
        sex: Sex::Male,
        weight_kg: 80.0,
        height_cm: 178.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::WeightLoss,
        meals_per_day: 4,
        dietary_pattern: DietaryPattern::Omnivore,
        restrictions: BTreeSet::new(),
        dislikes: Vec::new(),
        body_fat_pct: None,
    }
}

#[test]
fn test_reference_energy_chain() {
    let profile = reference_profile();

    let basal = bmr(&profile, BmrFormula::MifflinStJeor);
    assert_float_absolute_eq!(basal, 1767.5, 1e-6);

    let expenditure = tdee(basal, ActivityLevel::Sedentary);
    assert_float_absolute_eq!(expenditure, 2121.0, 1e-6);

    let target = goal_adjustment(expenditure, Goal::WeightLoss);
    assert_float_absolute_eq!(target, 1696.8, 1e-6);
}

#[test]
fn test_unknown_formula_identifier_uses_mifflin() {
    let profile = reference_profile();
    let formula = BmrFormula::parse("does-not-exist");
    assert_float_absolute_eq!(bmr(&profile, formula), 1767.5, 1e-6);
}

#[test]
fn test_bmi_boundaries_are_inclusive_lower() {
    assert_eq!(classify_bmi(18.5), BmiCategory::Normal);
    assert_eq!(classify_bmi(25.0), BmiCategory::Overweight);
    assert_eq!(classify_bmi(30.0), BmiCategory::ObesityI);
    assert_eq!(classify_bmi(35.0), BmiCategory::ObesityII);
    assert_eq!(classify_bmi(40.0), BmiCategory::ObesityIII);
}

#[test]
fn test_bmi_rounding() {
    // 57 / 1.75^2 = 18.61 -> 18.6
    let b = bmi(57.0, 175.0);
    assert_float_absolute_eq!(b.value, 18.6, 1e-9);
    assert_eq!(b.category, BmiCategory::Normal);

    // 122.5 / 1.75^2 = 40.0
    let b = bmi(122.5, 175.0);
    assert_float_absolute_eq!(b.value, 40.0, 1e-9);
    assert_eq!(b.category, BmiCategory::ObesityIII);
}

#[test]
fn test_macro_grams_cover_target() {
    for goal in Goal::ALL {
        let m = macro_split(1696.8, goal);
        let kcal = m.protein_g * 4.0 + m.carb_g * 4.0 + m.fat_g * 9.0;
        // One-decimal rounding on three values
        assert_float_absolute_eq!(kcal, 1696.8, 1.0);
    }
}

#[test]
fn test_slot_and_role_shares_sum_to_one() {
    for n in 1..=8u8 {
        for slot in meal_slots(n) {
            let roles: f64 = role_composition(slot.meal_type)
                .iter()
                .map(|(_, f)| f)
                .sum();
            assert_float_absolute_eq!(roles, 1.0, 1e-6);
        }
        let total: f64 = meal_slots(n).iter().map(|s| s.share).sum();
        assert_float_absolute_eq!(total, 1.0, 1e-6);
    }
}

#[test]
fn test_profile_json_unknown_activity_counts_as_sedentary() {
    let json = r#"{
        "name": "Reference", "age": 30, "sex": "male", "weight_kg": 80,
        "height_cm": 178, "activity_level": "very_light", "goal": "weight_loss"
    }"#;
    let profile: PatientProfile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.activity_level, ActivityLevel::Sedentary);

    let expenditure = tdee(bmr(&profile, BmrFormula::MifflinStJeor), profile.activity_level);
    assert_float_absolute_eq!(expenditure, 2121.0, 1e-6);
}
