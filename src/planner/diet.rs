use std::path::Path;

use tracing::info;

use crate::catalog::{load_catalog, FoodCatalog};
use crate::constraints::NutritionalConstraints;
use crate::error::Result;
use crate::models::Solution;
use crate::planner::builder::DietModelBuilder;
use crate::planner::lp_text::to_lp_text;
use crate::planner::solver::LpSolver;

/// Output of one optimisation run.
#[derive(Debug, Clone)]
pub struct DietOutcome {
    /// CPLEX LP text of the model that was solved.
    pub model_text: String,
    pub solution: Solution,
}

/// A catalog paired with the requirements it must satisfy.
#[derive(Debug, Clone)]
pub struct CheapestDiet {
    catalog: FoodCatalog,
    constraints: NutritionalConstraints,
}

impl CheapestDiet {
    /// Pair a catalog with constraints, rejecting constraints on untracked nutrients.
    pub fn new(catalog: FoodCatalog, constraints: NutritionalConstraints) -> Result<Self> {
        constraints.validate_against(&catalog)?;
        Ok(Self {
            catalog,
            constraints,
        })
    }

    /// Load the catalog at `path` and pair it with `constraints`.
    pub fn load<P: AsRef<Path>>(path: P, constraints: NutritionalConstraints) -> Result<Self> {
        let catalog = load_catalog(path)?;
        Self::new(catalog, constraints)
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    pub fn constraints(&self) -> &NutritionalConstraints {
        &self.constraints
    }

    /// Build the model, solve it with `solver`, and return the model text with
    /// the solution. A non-optimal status is returned, not raised.
    pub fn calculate<S: LpSolver>(&self, solver: &S) -> Result<DietOutcome> {
        let lp = DietModelBuilder::new(&self.catalog, &self.constraints).build()?;
        let model_text = to_lp_text(&lp);

        let solution = solver.solve(lp);
        info!(
            status = %solution.status,
            total_cost = solution.total_cost,
            "solve finished"
        );

        Ok(DietOutcome {
            model_text,
            solution,
        })
    }
}
