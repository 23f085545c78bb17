use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::constraints::options::{ConstraintConfig, CONSTRAINT_OPTIONS};
use crate::error::{DietError, Result};
use crate::models::NutritionalConstraint;

/// Ordered set of nutritional requirements handed to the model builder.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionalConstraints {
    constraints: Vec<NutritionalConstraint>,
}

impl NutritionalConstraints {
    /// Standard constraint set with some bounds replaced.
    ///
    /// Keys are the option names in `CONSTRAINT_OPTIONS`; any other key fails
    /// with `UnknownConstraint`.
    pub fn with_defaults<I, K>(overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut config = ConstraintConfig::default();
        for (key, value) in overrides {
            config = config.with_override(key.as_ref(), value)?;
        }
        Ok(Self::from_config(&config))
    }

    /// Standard constraint set built from explicit bounds.
    pub fn from_config(config: &ConstraintConfig) -> Self {
        let constraints = CONSTRAINT_OPTIONS
            .iter()
            .map(|option| {
                NutritionalConstraint::new(
                    option.key,
                    option.nutrient,
                    option.relation,
                    config.value(option.key).unwrap_or(option.default),
                )
            })
            .collect();
        Self { constraints }
    }

    /// Arbitrary constraint set, e.g. for a catalog with non-standard nutrients.
    pub fn new(constraints: Vec<NutritionalConstraint>) -> Result<Self> {
        let mut set = Self {
            constraints: Vec::with_capacity(constraints.len()),
        };
        for constraint in constraints {
            set = set.with_constraint(constraint)?;
        }
        Ok(set)
    }

    /// Append one more requirement. Names must be unique.
    pub fn with_constraint(mut self, constraint: NutritionalConstraint) -> Result<Self> {
        if !constraint.bound.is_finite() || constraint.bound < 0.0 {
            return Err(DietError::InvalidBound {
                key: constraint.name,
                value: constraint.bound,
            });
        }
        if self.constraints.iter().any(|c| c.name == constraint.name) {
            return Err(DietError::DuplicateConstraint(constraint.name));
        }
        self.constraints.push(constraint);
        Ok(self)
    }

    /// Check that every constraint's nutrient is tracked by `catalog`.
    pub fn validate_against(&self, catalog: &FoodCatalog) -> Result<()> {
        match self
            .constraints
            .iter()
            .find(|c| !catalog.has_nutrient(&c.nutrient))
        {
            Some(missing) => Err(DietError::UnknownNutrient(missing.nutrient.clone())),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutritionalConstraint> {
        self.constraints.iter()
    }

    pub fn as_slice(&self) -> &[NutritionalConstraint] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Default for NutritionalConstraints {
    fn default() -> Self {
        Self::from_config(&ConstraintConfig::default())
    }
}

/// Load bound overrides from a JSON object such as `{"max_sodium": 1500}`.
///
/// Keys are not checked here; pass the result to `with_defaults`.
pub fn load_overrides<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, f64>> {
    let content = fs::read_to_string(path.as_ref())?;
    let overrides: BTreeMap<String, f64> = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), count = overrides.len(), "constraint overrides loaded");
    Ok(overrides)
}
