mod options;
mod set;

pub use options::{
    suggest_key, ConstraintConfig, ConstraintOption, CONSTRAINT_OPTIONS,
    DEFAULT_CALORIES, DEFAULT_MAX_SATURATED_FAT, DEFAULT_MAX_SODIUM, DEFAULT_MIN_PROTEIN,
    DEFAULT_MIN_VITAMIN_A, DEFAULT_MIN_VITAMIN_C,
};
pub use set::{load_overrides, NutritionalConstraints};
