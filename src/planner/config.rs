use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::BmrFormula;
use crate::planner::constants::*;

/// Runtime-configurable planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Seed for the item-selection draws.
    pub seed: u64,
    pub formula: BmrFormula,
    pub portion_step_g: f64,
    pub min_portion_g: f64,
    /// Relative kcal/100g window for substitutes (0.3 = ±30%).
    pub substitution_tolerance: f64,
    pub max_substitutions: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            formula: BmrFormula::default(),
            portion_step_g: PORTION_STEP_G,
            min_portion_g: MIN_PORTION_G,
            substitution_tolerance: SUBSTITUTION_TOLERANCE,
            max_substitutions: MAX_SUBSTITUTIONS,
        }
    }
}

impl PlannerConfig {
    /// Load from a JSON file; missing keys keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.portion_step_g.is_finite() || self.portion_step_g <= 0.0 {
            return Err(DietError::InvalidInput(format!(
                "portion_step_g must be positive, got {}",
                self.portion_step_g
            )));
        }
        if !self.min_portion_g.is_finite() || self.min_portion_g <= 0.0 {
            return Err(DietError::InvalidInput(format!(
                "min_portion_g must be positive, got {}",
                self.min_portion_g
            )));
        }
        if !self.substitution_tolerance.is_finite() || self.substitution_tolerance < 0.0 {
            return Err(DietError::InvalidInput(format!(
                "substitution_tolerance must be non-negative, got {}",
                self.substitution_tolerance
            )));
        }
        Ok(())
    }

    /// Copy with a seed derived from `request_id`, so concurrent requests each
    /// get an independent, reproducible sequence.
    pub fn with_request_seed(&self, request_id: &str) -> Self {
        Self {
            seed: derive_seed(self.seed, request_id),
            ..self.clone()
        }
    }
}

/// Stable 64-bit FNV-1a of `request_id`, mixed with `base`.
pub fn derive_seed(base: u64, request_id: &str) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = request_id.bytes().fold(FNV_OFFSET, |acc, b| {
        (acc ^ b as u64).wrapping_mul(FNV_PRIME)
    });
    hash ^ base.rotate_left(32)
}
