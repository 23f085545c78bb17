use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::Relation;

/// Daily calorie target (kcal), met exactly.
pub const DEFAULT_CALORIES: f64 = 2000.0;

/// Maximum saturated fat (g).
pub const DEFAULT_MAX_SATURATED_FAT: f64 = 20.0;

/// Maximum sodium (mg).
pub const DEFAULT_MAX_SODIUM: f64 = 2400.0;

/// Minimum vitamin C (mg).
pub const DEFAULT_MIN_VITAMIN_C: f64 = 90.0;

/// Minimum vitamin A (µg).
pub const DEFAULT_MIN_VITAMIN_A: f64 = 700.0;

/// Minimum protein (g).
pub const DEFAULT_MIN_PROTEIN: f64 = 56.0;

/// A recognised override key and what it controls.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintOption {
    pub key: &'static str,
    pub nutrient: &'static str,
    pub relation: Relation,
    pub default: f64,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Every override key, in the order constraints are emitted.
pub const CONSTRAINT_OPTIONS: [ConstraintOption; 6] = [
    ConstraintOption {
        key: "calories",
        nutrient: "calories",
        relation: Relation::Eq,
        default: DEFAULT_CALORIES,
        unit: "kcal",
        description: "Total calories must equal this value",
    },
    ConstraintOption {
        key: "max_saturated_fat",
        nutrient: "saturated fat",
        relation: Relation::Le,
        default: DEFAULT_MAX_SATURATED_FAT,
        unit: "g",
        description: "Saturated fat may not exceed this value",
    },
    ConstraintOption {
        key: "max_sodium",
        nutrient: "sodium",
        relation: Relation::Le,
        default: DEFAULT_MAX_SODIUM,
        unit: "mg",
        description: "Sodium may not exceed this value",
    },
    ConstraintOption {
        key: "min_vitamin_c",
        nutrient: "vitamin c",
        relation: Relation::Ge,
        default: DEFAULT_MIN_VITAMIN_C,
        unit: "mg",
        description: "Vitamin C must reach at least this value",
    },
    ConstraintOption {
        key: "min_vitamin_a",
        nutrient: "vitamin a",
        relation: Relation::Ge,
        default: DEFAULT_MIN_VITAMIN_A,
        unit: "µg",
        description: "Vitamin A must reach at least this value",
    },
    ConstraintOption {
        key: "min_protein",
        nutrient: "protein",
        relation: Relation::Ge,
        default: DEFAULT_MIN_PROTEIN,
        unit: "g",
        description: "Protein must reach at least this value",
    },
];

/// Bound values for the standard constraint set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstraintConfig {
    pub calories: f64,
    pub max_saturated_fat: f64,
    pub max_sodium: f64,
    pub min_vitamin_c: f64,
    pub min_vitamin_a: f64,
    pub min_protein: f64,
}

impl Default for ConstraintConfig {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIES,
            max_saturated_fat: DEFAULT_MAX_SATURATED_FAT,
            max_sodium: DEFAULT_MAX_SODIUM,
            min_vitamin_c: DEFAULT_MIN_VITAMIN_C,
            min_vitamin_a: DEFAULT_MIN_VITAMIN_A,
            min_protein: DEFAULT_MIN_PROTEIN,
        }
    }
}

impl ConstraintConfig {
    /// Bound currently configured for an override key.
    pub fn value(&self, key: &str) -> Option<f64> {
        match key {
            "calories" => Some(self.calories),
            "max_saturated_fat" => Some(self.max_saturated_fat),
            "max_sodium" => Some(self.max_sodium),
            "min_vitamin_c" => Some(self.min_vitamin_c),
            "min_vitamin_a" => Some(self.min_vitamin_a),
            "min_protein" => Some(self.min_protein),
            _ => None,
        }
    }

    /// Return a copy with one bound replaced.
    ///
    /// Fails on an unknown key or a negative / non-finite value.
    pub fn with_override(self, key: &str, value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DietError::InvalidBound {
                key: key.to_string(),
                value,
            });
        }

        let mut next = self;
        let slot = match key {
            "calories" => &mut next.calories,
            "max_saturated_fat" => &mut next.max_saturated_fat,
            "max_sodium" => &mut next.max_sodium,
            "min_vitamin_c" => &mut next.min_vitamin_c,
            "min_vitamin_a" => &mut next.min_vitamin_a,
            "min_protein" => &mut next.min_protein,
            _ => {
                return Err(DietError::UnknownConstraint {
                    key: key.to_string(),
                    suggestion: suggest_key(key),
                });
            }
        };
        *slot = value;
        Ok(next)
    }
}

/// Closest known override key to a misspelt one.
pub fn suggest_key(key: &str) -> Option<String> {
    CONSTRAINT_OPTIONS
        .iter()
        .map(|o| (o.key, strsim::jaro_winkler(o.key, &key.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_option_table() {
        let config = ConstraintConfig::default();
        for option in &CONSTRAINT_OPTIONS {
            assert_eq!(config.value(option.key), Some(option.default));
        }
    }

    #[test]
    fn test_with_override() {
        let config = ConstraintConfig::default()
            .with_override("max_sodium", 1500.0)
            .unwrap();
        assert_eq!(config.max_sodium, 1500.0);
        assert_eq!(config.calories, DEFAULT_CALORIES);
    }

    #[test]
    fn test_override_rejects_negative() {
        let err = ConstraintConfig::default()
            .with_override("min_protein", -1.0)
            .unwrap_err();
        assert!(matches!(err, DietError::InvalidBound { .. }));
    }

    #[test]
    fn test_suggest_key() {
        assert_eq!(suggest_key("min_protien").as_deref(), Some("min_protein"));
        assert_eq!(suggest_key("zzz"), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ConstraintConfig = serde_json::from_str(r#"{"calories": 1800}"#).unwrap();
        assert_eq!(config.calories, 1800.0);
        assert_eq!(config.min_protein, DEFAULT_MIN_PROTEIN);
    }
}
