use std::fmt;

/// Relation between a nutrient total and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Eq,
    Le,
    Ge,
}

impl Relation {
    /// Operator as written in LP text.
    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Eq => "=",
            Relation::Le => "<=",
            Relation::Ge => ">=",
        }
    }

    /// Whether `lhs <relation> rhs` holds within `tolerance`.
    pub fn holds(self, lhs: f64, rhs: f64, tolerance: f64) -> bool {
        match self {
            Relation::Eq => (lhs - rhs).abs() <= tolerance,
            Relation::Le => lhs <= rhs + tolerance,
            Relation::Ge => lhs + tolerance >= rhs,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single nutritional requirement: `sum(content * quantity) <relation> bound`.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionalConstraint {
    /// Constraint identifier, also used as the LP row name.
    pub name: String,
    pub nutrient: String,
    pub relation: Relation,
    pub bound: f64,
}

impl NutritionalConstraint {
    pub fn new(
        name: impl Into<String>,
        nutrient: impl Into<String>,
        relation: Relation,
        bound: f64,
    ) -> Self {
        Self {
            name: name.into(),
            nutrient: nutrient.into(),
            relation,
            bound,
        }
    }

    /// Check a nutrient total against this constraint.
    pub fn is_satisfied_by(&self, total: f64, tolerance: f64) -> bool {
        self.relation.holds(total, self.bound, tolerance)
    }
}

impl fmt::Display for NutritionalConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.nutrient, self.relation, self.bound)
    }
}
