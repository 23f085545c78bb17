use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Parse error in row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Unknown food: {0}")]
    UnknownFood(String),

    #[error("Unknown nutrient: {0}")]
    UnknownNutrient(String),

    #[error("Unknown constraint '{key}'{}", suggestion_hint(.suggestion))]
    UnknownConstraint {
        key: String,
        suggestion: Option<String>,
    },

    #[error("Constraint '{0}' is defined more than once")]
    DuplicateConstraint(String),

    #[error("Invalid bound for '{key}': {value} (must be a finite, non-negative number)")]
    InvalidBound { key: String, value: f64 },

    #[error("Constraint '{constraint}' references nutrient '{nutrient}' which is not in the catalog")]
    MissingNutrient {
        constraint: String,
        nutrient: String,
    },

    #[error("No combination of the given foods meets the nutritional targets")]
    Infeasible,

    #[error("The diet cost is unbounded below")]
    Unbounded,

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DietError {
    /// Build a parse error for a 1-based file row.
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        DietError::Parse {
            row,
            message: message.into(),
        }
    }

    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            DietError::Parse { .. } | DietError::InvalidCatalog(_) => 2,
            DietError::UnknownFood(_)
            | DietError::UnknownNutrient(_)
            | DietError::UnknownConstraint { .. }
            | DietError::DuplicateConstraint(_)
            | DietError::InvalidBound { .. }
            | DietError::MissingNutrient { .. } => 3,
            DietError::Infeasible => 4,
            DietError::Unbounded => 5,
            DietError::Solver(_) => 6,
            DietError::Io(_) | DietError::Csv(_) | DietError::Json(_) => 7,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DietError>;
