use crate::models::Relation;

/// One purchase-quantity unknown, bounded to `[lower, upper]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionVariable {
    /// Identifier used in LP text, e.g. `x_Whole_Milk`.
    pub name: String,
    pub food: String,
    pub lower: f64,
    pub upper: f64,
}

/// `sum(coefficients[i] * x[i]) <relation> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintRow {
    pub name: String,
    pub nutrient: String,
    /// Aligned with the program's variables.
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

impl ConstraintRow {
    /// Left-hand side evaluated at `values`.
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .zip(values)
            .map(|(c, x)| c * x)
            .sum()
    }

    /// True when no variable has a non-zero coefficient.
    pub fn is_empty(&self) -> bool {
        self.coefficients.iter().all(|c| *c == 0.0)
    }
}

/// A minimisation linear program over non-negative continuous variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgramSpec {
    pub(crate) name: String,
    pub(crate) variables: Vec<DecisionVariable>,
    pub(crate) objective: Vec<f64>,
    pub(crate) rows: Vec<ConstraintRow>,
}

impl LinearProgramSpec {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[DecisionVariable] {
        &self.variables
    }

    /// Cost coefficients aligned with `variables()`.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn rows(&self) -> &[ConstraintRow] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&ConstraintRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Objective evaluated at `values`.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective.iter().zip(values).map(|(c, x)| c * x).sum()
    }

    /// Rows not satisfied by `values` within `tolerance`.
    pub fn violated_rows(&self, values: &[f64], tolerance: f64) -> Vec<&ConstraintRow> {
        self.rows
            .iter()
            .filter(|r| !r.relation.holds(r.activity(values), r.rhs, tolerance))
            .collect()
    }
}
