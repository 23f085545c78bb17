mod builder;
mod diet;
mod lp_text;
mod model;
mod solver;

pub use builder::{build_model, lp_identifier, sanitize_identifier, DietModelBuilder, MODEL_NAME};
pub use diet::{CheapestDiet, DietOutcome};
pub use lp_text::to_lp_text;
pub use model::{ConstraintRow, DecisionVariable, LinearProgramSpec};
pub use solver::{LpSolver, MicroLpSolver};
