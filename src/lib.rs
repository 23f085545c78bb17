pub mod catalog;
pub mod cli;
pub mod constraints;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use constraints::NutritionalConstraints;
pub use error::{DietError, Result};
pub use models::{NutritionalConstraint, Relation, Solution, SolveStatus};
pub use planner::{CheapestDiet, DietModelBuilder, LinearProgramSpec, LpSolver, MicroLpSolver};
