use std::collections::BTreeMap;

use crate::error::{DietError, Result};
use crate::models::{FoodGroup, FoodItem};

/// Immutable, ordered collection of food rows.
///
/// Row order is preserved from the source so that seeded selection is
/// reproducible. Filtering always yields a new catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    /// Fail fast on a catalog the planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(DietError::InvalidCatalog(
                "catalog contains no food rows".to_string(),
            ));
        }
        if !self.items.iter().any(FoodItem::has_energy) {
            return Err(DietError::InvalidCatalog(
                "no food row has a positive energy value".to_string(),
            ));
        }
        Ok(())
    }

    /// Find the first item by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&FoodItem> {
        let needle = name.to_lowercase();
        self.items.iter().find(|f| f.name.to_lowercase() == needle)
    }

    /// Items usable for portion math.
    pub fn with_energy(&self) -> Vec<&FoodItem> {
        self.items.iter().filter(|f| f.has_energy()).collect()
    }

    /// Items belonging to any of `groups`, in catalog order.
    pub fn in_groups(&self, groups: &[FoodGroup]) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|f| groups.contains(&f.group))
            .collect()
    }

    /// New catalog holding the rows that satisfy `predicate`.
    pub fn filtered<P>(&self, predicate: P) -> FoodCatalog
    where
        P: Fn(&FoodItem) -> bool,
    {
        FoodCatalog::new(self.items.iter().filter(|f| predicate(f)).cloned().collect())
    }

    /// Row count per group.
    pub fn group_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.group.label()).or_insert(0) += 1;
        }
        counts
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<FoodItem>> for FoodCatalog {
    fn from(items: Vec<FoodItem>) -> Self {
        Self::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<FoodItem> {
        vec![
            FoodItem::new("Rice", FoodGroup::Cereal, 128.0),
            FoodItem::new("Banana", FoodGroup::Fruit, 98.0),
            FoodItem::new("Water", FoodGroup::Other, 0.0),
            FoodItem::new("Potato", FoodGroup::Tuber, 52.0),
        ]
    }

    #[test]
    fn test_validate_empty() {
        let catalog = FoodCatalog::default();
        assert!(matches!(
            catalog.validate(),
            Err(DietError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_validate_all_zero_energy() {
        let catalog = FoodCatalog::new(vec![FoodItem::new("Water", FoodGroup::Other, 0.0)]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_find_case_insensitive() {
        let catalog = FoodCatalog::new(sample_items());
        assert!(catalog.find("rice").is_some());
        assert!(catalog.find("BANANA").is_some());
        assert!(catalog.find("apple").is_none());
    }

    #[test]
    fn test_in_groups_preserves_order() {
        let catalog = FoodCatalog::new(sample_items());
        let carbs = catalog.in_groups(&[FoodGroup::Cereal, FoodGroup::Tuber]);
        let names: Vec<&str> = carbs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Rice", "Potato"]);
    }

    #[test]
    fn test_with_energy_excludes_zero() {
        let catalog = FoodCatalog::new(sample_items());
        assert_eq!(catalog.with_energy().len(), 3);
    }

    #[test]
    fn test_filtered_does_not_mutate_source() {
        let catalog = FoodCatalog::new(sample_items());
        let fruit = catalog.filtered(|f| f.group == FoodGroup::Fruit);
        assert_eq!(fruit.len(), 1);
        assert_eq!(catalog.len(), 4);
    }
}
