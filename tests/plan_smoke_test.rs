use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use meal_plan_engine::catalog::FoodCatalog;
use meal_plan_engine::error::DietError;
use meal_plan_engine::models::{
    ActivityLevel, DietaryPattern, FoodGroup, FoodItem, Goal, PatientProfile, Restriction, Sex,
};
use meal_plan_engine::planner::{
    PlannerConfig, allowed_groups, filter_catalog, generate_plan, generate_plan_with_rng,
};

fn food(name: &str, group: FoodGroup, kcal: f64) -> FoodItem {
    FoodItem::new(name, group, kcal)
}

fn animal(name: &str, kcal: f64, lactose: bool, egg: bool) -> FoodItem {
    let mut item = food(name, FoodGroup::AnimalProtein, kcal);
    item.vegan = false;
    item.vegetarian = lactose || egg;
    item.contains_lactose = lactose;
    item.contains_egg = egg;
    item
}

fn sample_catalog() -> FoodCatalog {
    let mut bread = food("Wheat bread", FoodGroup::Cereal, 265.0);
    bread.gluten_free = false;
    let mut almonds = food("Almonds", FoodGroup::PlantProtein, 380.0);
    almonds.contains_nuts = true;

    FoodCatalog::new(vec![
        food("Rice", FoodGroup::Cereal, 128.0),
        food("Pasta", FoodGroup::Cereal, 158.0),
        bread,
        food("Oats", FoodGroup::Cereal, 389.0),
        food("Potato", FoodGroup::Tuber, 77.0),
        food("Sweet potato", FoodGroup::Tuber, 86.0),
        food("Cassava", FoodGroup::Tuber, 125.0),
        food("Banana", FoodGroup::Fruit, 98.0),
        food("Apple", FoodGroup::Fruit, 56.0),
        food("Mango", FoodGroup::Fruit, 64.0),
        food("Papaya", FoodGroup::Fruit, 40.0),
        food("Broccoli", FoodGroup::Vegetable, 35.0),
        food("Carrot", FoodGroup::Vegetable, 41.0),
        food("Zucchini", FoodGroup::Vegetable, 19.0),
        food("Black beans", FoodGroup::Legume, 77.0),
        food("Lentils", FoodGroup::Legume, 116.0),
        animal("Chicken breast", 159.0, false, false),
        animal("Beef", 219.0, false, false),
        animal("Cheese", 330.0, true, false),
        animal("Boiled egg", 146.0, false, true),
        food("Tofu", FoodGroup::PlantProtein, 144.0),
        almonds,
        food("Water", FoodGroup::Other, 0.0),
    ])
}

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
fn test_reference_scenario_end_to_end() {
    let catalog = sample_catalog();
    let profile = reference_profile();
    let config = PlannerConfig::default();
    let plan = generate_plan(&profile, &catalog, &config).unwrap();

    assert_eq!(plan.meals.len(), 4);
    assert!((plan.target_calories - 1696.8).abs() < 1e-6);
    assert!(plan.restrictions_honored);

    let max_density = catalog
        .iter()
        .map(|f| f.kcal_per_100g)
        .fold(0.0, f64::max);
    // Half a portion step plus integer rounding, per item
    let per_item = config.portion_step_g / 2.0 * max_density / 100.0 + 0.5;

    for meal in &plan.meals {
        assert_eq!(meal.items.len(), 3, "{} is missing a role", meal.name);

        let sum: f64 = meal.items.iter().map(|i| i.calories).sum();
        assert!((meal.calories - sum).abs() < 1e-9);

        let tolerance = per_item * meal.items.len() as f64 + 0.5;
        assert!(
            (meal.calories - meal.target_calories).abs() <= tolerance,
            "{}: {} kcal vs target {}",
            meal.name,
            meal.calories,
            meal.target_calories
        );

        for item in &meal.items {
            let groups = allowed_groups(item.role, profile.dietary_pattern);
            assert!(groups.contains(&item.food.group));
            assert!(!item.substitutions.contains(&item.food.name));
            for name in &item.substitutions {
                let sub = catalog.find(name).unwrap();
                assert!(
                    groups.contains(&sub.group),
                    "{} is not a valid {} substitute",
                    name,
                    item.role.label()
                );
            }
        }
    }
}

#[test]
fn test_grams_are_positive_multiples_of_step() {
    let catalog = sample_catalog();
    let config = PlannerConfig::default();

    for seed in 0..20 {
        for meals in 3..=6 {
            let mut profile = reference_profile();
            profile.meals_per_day = meals;
            let plan = generate_plan(&profile, &catalog, &PlannerConfig { seed, ..config.clone() })
                .unwrap();

            for item in plan.meals.iter().flat_map(|m| m.items.iter()) {
                assert!(item.grams >= config.min_portion_g);
                assert_eq!(item.grams % config.portion_step_g, 0.0);
                assert!(item.food.has_energy());
            }
        }
    }
}

#[test]
fn test_same_seed_gives_identical_plan() {
    let catalog = sample_catalog();
    let profile = reference_profile();
    let config = PlannerConfig {
        seed: 2024,
        ..Default::default()
    };

    let first =
        serde_json::to_string(&generate_plan(&profile, &catalog, &config).unwrap()).unwrap();
    let second =
        serde_json::to_string(&generate_plan(&profile, &catalog, &config).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_injected_rng_matches_seeded_plan() {
    let catalog = sample_catalog();
    let profile = reference_profile();
    let config = PlannerConfig::default();

    let seeded = generate_plan(&profile, &catalog, &config).unwrap();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let injected = generate_plan_with_rng(&profile, &catalog, &config, &mut rng).unwrap();
    assert_eq!(seeded, injected);
}

#[test]
fn test_request_seeds_are_independent() {
    let catalog = sample_catalog();
    let profile = reference_profile();
    let config = PlannerConfig::default();

    let a = generate_plan(&profile, &catalog, &config.with_request_seed("a")).unwrap();
    let a_again = generate_plan(&profile, &catalog, &config.with_request_seed("a")).unwrap();
    let b = generate_plan(&profile, &catalog, &config.with_request_seed("b")).unwrap();

    assert_eq!(a, a_again);
    assert_ne!(a.seed, b.seed);
}

#[test]
fn test_vegetarian_gets_no_animal_protein() {
    let mut profile = reference_profile();
    profile.dietary_pattern = DietaryPattern::Vegetarian;
    let plan = generate_plan(&profile, &sample_catalog(), &PlannerConfig::default()).unwrap();

    for item in plan.meals.iter().flat_map(|m| m.items.iter()) {
        assert_ne!(item.food.group, FoodGroup::AnimalProtein);
        assert!(item.food.vegetarian);
    }
}

#[test]
fn test_restrictions_are_respected_in_plan() {
    let mut profile = reference_profile();
    profile.restrictions = [
        Restriction::Celiac,
        Restriction::NutAllergy,
        Restriction::LactoseIntolerant,
        Restriction::EggAllergy,
    ]
    .into_iter()
    .collect();
    profile.meals_per_day = 6;

    for seed in 0..10 {
        let config = PlannerConfig {
            seed,
            ..Default::default()
        };
        let plan = generate_plan(&profile, &sample_catalog(), &config).unwrap();
        assert!(plan.restrictions_honored);
        for item in plan.meals.iter().flat_map(|m| m.items.iter()) {
            assert!(item.food.gluten_free);
            assert!(!item.food.contains_nuts);
            assert!(!item.food.contains_lactose);
            assert!(!item.food.contains_egg);
            for name in &item.substitutions {
                assert_ne!(name, "Wheat bread");
                assert_ne!(name, "Almonds");
                assert_ne!(name, "Cheese");
                assert_ne!(name, "Boiled egg");
            }
        }
    }
}

#[test]
fn test_restriction_filter_fixed_point() {
    let mut profile = reference_profile();
    profile.dietary_pattern = DietaryPattern::Vegan;
    profile.restrictions.insert(Restriction::Celiac);

    let once = filter_catalog(&sample_catalog(), &profile);
    let twice = filter_catalog(&once.catalog, &profile);
    assert_eq!(once.catalog, twice.catalog);
}

#[test]
fn test_over_restriction_falls_back_and_is_flagged() {
    let mut profile = reference_profile();
    profile.dietary_pattern = DietaryPattern::Vegan;
    profile.dislikes = sample_catalog()
        .iter()
        .filter(|f| f.vegan)
        .map(|f| f.name.clone())
        .collect();

    let outcome = filter_catalog(&sample_catalog(), &profile);
    assert!(!outcome.honored);
    assert_eq!(outcome.catalog, sample_catalog());

    let plan = generate_plan(&profile, &sample_catalog(), &PlannerConfig::default()).unwrap();
    assert!(!plan.restrictions_honored);
    assert_eq!(plan.meals.len(), 4);
}

#[test]
fn test_missing_group_falls_back_without_failing() {
    // No fruit and no vegetables at all
    let catalog = FoodCatalog::new(vec![
        food("Rice", FoodGroup::Cereal, 128.0),
        food("Tofu", FoodGroup::PlantProtein, 144.0),
    ]);
    let plan = generate_plan(&reference_profile(), &catalog, &PlannerConfig::default()).unwrap();

    for meal in &plan.meals {
        assert_eq!(meal.items.len(), 3);
    }
}

#[test]
fn test_invalid_inputs_are_distinct_errors() {
    let mut profile = reference_profile();
    profile.weight_kg = -1.0;
    assert!(matches!(
        generate_plan(&profile, &sample_catalog(), &PlannerConfig::default()),
        Err(DietError::InvalidProfile(_))
    ));

    let zero_energy = FoodCatalog::new(vec![food("Water", FoodGroup::Other, 0.0)]);
    assert!(matches!(
        generate_plan(&reference_profile(), &zero_energy, &PlannerConfig::default()),
        Err(DietError::InvalidCatalog(_))
    ));
}
