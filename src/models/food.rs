use serde::{Deserialize, Serialize};

/// Catalog category a food belongs to.
///
/// Deserializes through [`FoodGroup::from_label`], so any label spelling is
/// accepted and unknown labels become `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum FoodGroup {
    Cereal,
    Tuber,
    Fruit,
    Vegetable,
    Legume,
    AnimalProtein,
    PlantProtein,
    Other,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 8] = [
        FoodGroup::Cereal,
        FoodGroup::Tuber,
        FoodGroup::Fruit,
        FoodGroup::Vegetable,
        FoodGroup::Legume,
        FoodGroup::AnimalProtein,
        FoodGroup::PlantProtein,
        FoodGroup::Other,
    ];

    /// Resolve a free-text group label (English or Portuguese).
    ///
    /// Unrecognized labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'á' | 'à' | 'â' | 'ã' => 'a',
                'é' | 'ê' => 'e',
                'í' => 'i',
                'ó' | 'ô' | 'õ' => 'o',
                'ú' => 'u',
                'ç' => 'c',
                ' ' | '-' => '_',
                other => other,
            })
            .collect();

        match normalized.as_str() {
            "cereal" | "cereais" | "grain" | "grains" => FoodGroup::Cereal,
            "tuber" | "tubers" | "tuberculo" | "tuberculos" => FoodGroup::Tuber,
            "fruit" | "fruits" | "fruta" | "frutas" => FoodGroup::Fruit,
            "vegetable" | "vegetables" | "hortalica" | "hortalicas" | "verdura" => {
                FoodGroup::Vegetable
            }
            "legume" | "legumes" | "leguminosa" | "leguminosas" => FoodGroup::Legume,
            "animal_protein" | "proteina_animal" | "meat" | "carne" => FoodGroup::AnimalProtein,
            "plant_protein" | "vegetable_protein" | "proteina_vegetal" => FoodGroup::PlantProtein,
            _ => FoodGroup::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodGroup::Cereal => "cereal",
            FoodGroup::Tuber => "tuber",
            FoodGroup::Fruit => "fruit",
            FoodGroup::Vegetable => "vegetable",
            FoodGroup::Legume => "legume",
            FoodGroup::AnimalProtein => "animal protein",
            FoodGroup::PlantProtein => "plant protein",
            FoodGroup::Other => "other",
        }
    }
}

impl From<String> for FoodGroup {
    fn from(label: String) -> Self {
        FoodGroup::from_label(&label)
    }
}

fn yes() -> bool {
    true
}

/// A food-composition row with energy per 100 g and compatibility tags.
///
/// Absent tags default to "no restriction applies": `*_safe`-style tags are
/// true and `contains_*` tags are false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(default)]
    pub preparation: String,

    pub group: FoodGroup,

    #[serde(rename = "energy_kcal_per_100g", default)]
    pub kcal_per_100g: f64,

    #[serde(default = "yes", alias = "is_vegetarian")]
    pub vegetarian: bool,

    #[serde(default = "yes", alias = "is_vegan")]
    pub vegan: bool,

    #[serde(default = "yes", alias = "is_gluten_free")]
    pub gluten_free: bool,

    #[serde(default = "yes", alias = "is_ok_for_diabetes", alias = "ok_for_diabetes")]
    pub diabetes_safe: bool,

    #[serde(default = "yes", alias = "is_low_sodium")]
    pub low_sodium: bool,

    #[serde(default)]
    pub contains_lactose: bool,

    #[serde(default)]
    pub contains_egg: bool,

    #[serde(default)]
    pub contains_nuts: bool,
}

impl FoodItem {
    /// Untagged item: compatible with every restriction.
    pub fn new(name: impl Into<String>, group: FoodGroup, kcal_per_100g: f64) -> Self {
        Self {
            name: name.into(),
            preparation: String::new(),
            group,
            kcal_per_100g,
            vegetarian: true,
            vegan: true,
            gluten_free: true,
            diabetes_safe: true,
            low_sodium: true,
            contains_lactose: false,
            contains_egg: false,
            contains_nuts: false,
        }
    }

    /// Whether the item can take part in portion math.
    #[inline]
    pub fn has_energy(&self) -> bool {
        self.kcal_per_100g.is_finite() && self.kcal_per_100g > 0.0
    }

    /// Calories delivered by `grams` of this item.
    #[inline]
    pub fn kcal_for(&self, grams: f64) -> f64 {
        grams * self.kcal_per_100g / 100.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal/100g",
            self.name,
            self.group.label(),
            self.kcal_per_100g
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_labels_portuguese() {
        assert_eq!(FoodGroup::from_label("Tubérculo"), FoodGroup::Tuber);
        assert_eq!(FoodGroup::from_label("fruta"), FoodGroup::Fruit);
        assert_eq!(FoodGroup::from_label("hortaliça"), FoodGroup::Vegetable);
        assert_eq!(FoodGroup::from_label("proteina animal"), FoodGroup::AnimalProtein);
        assert_eq!(FoodGroup::from_label("proteina_vegetal"), FoodGroup::PlantProtein);
    }

    #[test]
    fn test_group_unknown_is_other() {
        assert_eq!(FoodGroup::from_label("sweets"), FoodGroup::Other);
        assert_eq!(FoodGroup::from_label(""), FoodGroup::Other);
    }

    #[test]
    fn test_has_energy() {
        assert!(FoodItem::new("Rice", FoodGroup::Cereal, 128.0).has_energy());
        assert!(!FoodItem::new("Water", FoodGroup::Other, 0.0).has_energy());
        assert!(!FoodItem::new("Broken", FoodGroup::Other, f64::NAN).has_energy());
    }

    #[test]
    fn test_missing_tags_default_to_permissive() {
        let json = r#"{"name": "Apple", "group": "fruit", "energy_kcal_per_100g": 52}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert!(item.vegan && item.vegetarian && item.gluten_free);
        assert!(item.diabetes_safe && item.low_sodium);
        assert!(!item.contains_lactose && !item.contains_egg && !item.contains_nuts);
    }

    #[test]
    fn test_tag_column_aliases() {
        let json = r#"{"name": "Chicken", "group": "animal_protein", "energy_kcal_per_100g": 165,
                      "is_vegetarian": false, "is_vegan": false, "is_ok_for_diabetes": true,
                      "is_gluten_free": true, "is_low_sodium": false}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert!(!item.vegetarian && !item.vegan);
        assert!(item.gluten_free && item.diabetes_safe);
        assert!(!item.low_sodium);
    }

    #[test]
    fn test_group_deserializes_any_label() {
        let group: FoodGroup = serde_json::from_str(r#""Fruta""#).unwrap();
        assert_eq!(group, FoodGroup::Fruit);
        let group: FoodGroup = serde_json::from_str(r#""sweets""#).unwrap();
        assert_eq!(group, FoodGroup::Other);

        let json = serde_json::to_string(&FoodGroup::PlantProtein).unwrap();
        assert_eq!(json, r#""plant_protein""#);
        assert_eq!(serde_json::from_str::<FoodGroup>(&json).unwrap(), FoodGroup::PlantProtein);
    }

    #[test]
    fn test_kcal_for() {
        let rice = FoodItem::new("Rice", FoodGroup::Cereal, 128.0);
        assert!((rice.kcal_for(150.0) - 192.0).abs() < 0.001);
    }
}
