use crate::models::{FoodItem, Plan};

/// Display a plan as formatted meal tables.
pub fn display_plan(plan: &Plan) {
    println!();
    println!("=== Meal Plan: {} ===", plan.patient_name);
    println!();
    println!(
        "BMI: {:.1} ({})",
        plan.bmi.value,
        plan.bmi.category.label()
    );
    println!("BMR: {:.0} kcal ({})", plan.bmr, plan.formula.label());
    println!("TDEE: {:.0} kcal", plan.tdee);
    println!("Target: {:.0} kcal", plan.target_calories);
    println!(
        "Macros: P {:.1} g | C {:.1} g | F {:.1} g",
        plan.macros.protein_g, plan.macros.carb_g, plan.macros.fat_g
    );
    println!("Water: {} ml", plan.water_ml);

    if !plan.restrictions_honored {
        println!();
        println!("WARNING: the dietary restrictions excluded every food in the catalog.");
        println!("         Items below were drawn from the UNFILTERED catalog; review before use.");
    }

    let max_name_len = plan
        .meals
        .iter()
        .flat_map(|m| m.items.iter())
        .map(|i| i.food.name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!();
        println!(
            "--- {} ({:.0} / {:.0} kcal) ---",
            meal.name, meal.calories, meal.target_calories
        );

        if meal.items.is_empty() {
            println!("  (no suitable foods)");
            continue;
        }

        for item in &meal.items {
            let prep = if item.food.preparation.is_empty() {
                String::new()
            } else {
                format!(" ({})", item.food.preparation)
            };

            println!(
                "  {:<9} {:<width$} {:>5.0} g {:>5.0} kcal{}",
                item.role.label(),
                item.food.name,
                item.grams,
                item.calories,
                prep,
                width = max_name_len
            );

            if !item.substitutions.is_empty() {
                println!("            or: {}", item.substitutions.join(", "));
            }
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total meals: {}", plan.meals.len());
    println!("Total items: {}", plan.item_count());
    println!(
        "Total calories: {:.0} (target {:.0})",
        plan.total_calories(),
        plan.target_calories
    );
    println!("Seed: {}", plan.seed);

    print_tips("Hydration", &plan.guidance.hydration);
    print_tips("Sleep hygiene", &plan.guidance.sleep_hygiene);
    print_tips("Food education", &plan.guidance.education);
    println!();
}

fn print_tips(title: &str, tips: &[String]) {
    if tips.is_empty() {
        return;
    }
    println!();
    println!("--- {} ---", title);
    for tip in tips {
        println!("  * {}", tip);
    }
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        let mut tags = Vec::new();
        if food.vegan {
            tags.push("vegan");
        } else if food.vegetarian {
            tags.push("vegetarian");
        }
        if food.gluten_free {
            tags.push("gluten-free");
        }
        if food.contains_lactose {
            tags.push("lactose");
        }
        if food.contains_egg {
            tags.push("egg");
        }
        if food.contains_nuts {
            tags.push("nuts");
        }

        println!(
            "  {} - {} kcal/100g [{}] {}",
            food.name,
            food.kcal_per_100g,
            food.group.label(),
            tags.join(", ")
        );
    }

    println!();
}
