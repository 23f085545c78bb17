use std::collections::HashSet;

use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::constraints::NutritionalConstraints;
use crate::error::{DietError, Result};
use crate::planner::model::{ConstraintRow, DecisionVariable, LinearProgramSpec};

/// Title written into the LP text.
pub const MODEL_NAME: &str = "Cheapest Healthy Diet";

/// Turns a catalog and a constraint set into a linear program.
///
/// Nothing here names a specific nutrient: each constraint becomes one row
/// whose coefficients are that nutrient's per-food content.
pub struct DietModelBuilder<'a> {
    catalog: &'a FoodCatalog,
    constraints: &'a NutritionalConstraints,
}

impl<'a> DietModelBuilder<'a> {
    pub fn new(catalog: &'a FoodCatalog, constraints: &'a NutritionalConstraints) -> Self {
        Self {
            catalog,
            constraints,
        }
    }

    /// Build the program: minimise total price subject to one row per constraint.
    pub fn build(&self) -> Result<LinearProgramSpec> {
        let foods = self.catalog.all_foods();

        let mut taken = HashSet::with_capacity(foods.len());
        let variables: Vec<DecisionVariable> = foods
            .iter()
            .map(|food| DecisionVariable {
                name: unique_identifier(&format!("x_{}", food), &mut taken),
                food: food.clone(),
                lower: 0.0,
                upper: f64::INFINITY,
            })
            .collect();

        let objective = self.catalog.prices().to_vec();

        let mut row_names = HashSet::with_capacity(self.constraints.len());
        let mut rows = Vec::with_capacity(self.constraints.len());
        for constraint in self.constraints.iter() {
            let coefficients = self
                .catalog
                .nutrient_values(&constraint.nutrient)
                .map_err(|_| DietError::MissingNutrient {
                    constraint: constraint.name.clone(),
                    nutrient: constraint.nutrient.clone(),
                })?
                .to_vec();

            rows.push(ConstraintRow {
                name: unique_identifier(&constraint.name, &mut row_names),
                nutrient: constraint.nutrient.clone(),
                coefficients,
                relation: constraint.relation,
                rhs: constraint.bound,
            });
        }

        debug!(
            variables = variables.len(),
            rows = rows.len(),
            "diet model built"
        );

        Ok(LinearProgramSpec {
            name: MODEL_NAME.to_string(),
            variables,
            objective,
            rows,
        })
    }
}

/// Shorthand for `DietModelBuilder::new(catalog, constraints).build()`.
pub fn build_model(
    catalog: &FoodCatalog,
    constraints: &NutritionalConstraints,
) -> Result<LinearProgramSpec> {
    DietModelBuilder::new(catalog, constraints).build()
}

/// Replace characters LP readers reject with `_`.
pub fn sanitize_identifier(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Sanitised identifier that starts with a letter, prefixed `c_` otherwise.
pub fn lp_identifier(raw: &str) -> String {
    let name = sanitize_identifier(raw);
    if name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        name
    } else {
        format!("c_{}", name)
    }
}

/// LP identifier, suffixed `_2`, `_3`, ... until unused.
fn unique_identifier(raw: &str, taken: &mut HashSet<String>) -> String {
    let base = lp_identifier(raw);
    let mut candidate = base.clone();
    let mut n = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{}_{}", base, n);
        n += 1;
    }
    candidate
}
