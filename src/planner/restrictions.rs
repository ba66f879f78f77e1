use crate::catalog::FoodCatalog;
use crate::models::{DietaryPattern, FoodItem, PatientProfile, Restriction};

/// Result of applying a profile's restrictions to a catalog.
#[derive(Debug, Clone)]
pub struct RestrictionOutcome {
    pub catalog: FoodCatalog,
    /// False when every row was excluded and the full catalog was returned.
    pub honored: bool,
}

fn pattern_allows(item: &FoodItem, pattern: DietaryPattern) -> bool {
    match pattern {
        DietaryPattern::Omnivore => true,
        DietaryPattern::Vegetarian => item.vegetarian,
        DietaryPattern::Vegan => item.vegan,
    }
}

fn restriction_allows(item: &FoodItem, restriction: Restriction) -> bool {
    match restriction {
        Restriction::Celiac => item.gluten_free,
        Restriction::Diabetic => item.diabetes_safe,
        Restriction::Hypertensive => item.low_sodium,
        Restriction::LactoseIntolerant => !item.contains_lactose,
        Restriction::EggAllergy => !item.contains_egg,
        Restriction::NutAllergy => !item.contains_nuts,
    }
}

fn is_disliked(item: &FoodItem, dislikes: &[String]) -> bool {
    let name = item.name.to_lowercase();
    dislikes
        .iter()
        .map(|d| d.trim().to_lowercase())
        .any(|d| !d.is_empty() && name.contains(&d))
}

/// Whether a single row passes every active predicate for `profile`.
pub fn is_allowed(item: &FoodItem, profile: &PatientProfile) -> bool {
    pattern_allows(item, profile.dietary_pattern)
        && profile
            .restrictions
            .iter()
            .all(|r| restriction_allows(item, *r))
        && !is_disliked(item, &profile.dislikes)
}

/// Reduce the catalog to rows compatible with the profile.
///
/// When no row with usable energy survives, the full catalog is returned and
/// `honored` is false.
pub fn filter_catalog(catalog: &FoodCatalog, profile: &PatientProfile) -> RestrictionOutcome {
    let filtered = catalog.filtered(|item| is_allowed(item, profile));

    if filtered.with_energy().is_empty() {
        tracing::warn!(
            "Restrictions for '{}' exclude every usable food; falling back to the full catalog ({} rows)",
            profile.name,
            catalog.len()
        );
        return RestrictionOutcome {
            catalog: catalog.clone(),
            honored: false,
        };
    }

    tracing::debug!(
        "Restriction filter kept {} of {} rows",
        filtered.len(),
        catalog.len()
    );

    RestrictionOutcome {
        catalog: filtered,
        honored: true,
    }
}
