mod constraint;
mod food;
mod solution;

pub use constraint::{NutritionalConstraint, Relation};
pub use food::FoodItem;
pub use solution::{SolveStatus, Solution};
