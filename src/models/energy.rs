use serde::{Deserialize, Serialize};

/// BMI screening category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    ObesityI,
    ObesityII,
    ObesityIII,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObesityI => "obesity class I",
            BmiCategory::ObesityII => "obesity class II",
            BmiCategory::ObesityIII => "obesity class III",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// kg/m², one decimal.
    pub value: f64,
    pub category: BmiCategory,
}

/// Selectable basal metabolic rate equation.
///
/// Deserializes through [`BmrFormula::parse`]; unknown identifiers select
/// Mifflin-St Jeor rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BmrFormula {
    #[default]
    MifflinStJeor,
    HarrisBenedict,
    Owen,
    Cunningham,
}

impl From<String> for BmrFormula {
    fn from(id: String) -> Self {
        BmrFormula::parse(&id)
    }
}

impl BmrFormula {
    /// Resolve a formula identifier. Unrecognized identifiers select
    /// Mifflin-St Jeor.
    pub fn parse(id: &str) -> Self {
        let normalized: String = id
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "mifflin" | "mifflinstjeor" | "msj" => BmrFormula::MifflinStJeor,
            "harris" | "harrisbenedict" | "hb" => BmrFormula::HarrisBenedict,
            "owen" => BmrFormula::Owen,
            "cunningham" => BmrFormula::Cunningham,
            _ => {
                tracing::warn!("Unknown BMR formula '{}', using Mifflin-St Jeor", id);
                BmrFormula::MifflinStJeor
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "Mifflin-St Jeor",
            BmrFormula::HarrisBenedict => "Harris-Benedict (revised)",
            BmrFormula::Owen => "Owen",
            BmrFormula::Cunningham => "Cunningham",
        }
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}
