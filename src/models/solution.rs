use std::fmt;

use crate::error::{DietError, Result};

/// Outcome reported by the LP solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    Error,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::Error => "Error",
        };
        f.write_str(name)
    }
}

/// Result of one solve: per-food quantities in catalog order plus total cost.
///
/// Quantities are only populated for an optimal solve.
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: SolveStatus,
    pub quantities: Vec<(String, f64)>,
    pub total_cost: f64,

    /// Solver diagnostic for non-optimal outcomes.
    pub message: Option<String>,
}

impl Solution {
    pub fn optimal(quantities: Vec<(String, f64)>, total_cost: f64) -> Self {
        Self {
            status: SolveStatus::Optimal,
            quantities,
            total_cost,
            message: None,
        }
    }

    pub fn failed(status: SolveStatus, message: Option<String>) -> Self {
        Self {
            status,
            quantities: Vec::new(),
            total_cost: 0.0,
            message,
        }
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Solved quantity for a food, if present.
    pub fn quantity_of(&self, food: &str) -> Option<f64> {
        self.quantities
            .iter()
            .find(|(name, _)| name == food)
            .map(|(_, q)| *q)
    }

    /// Map a non-optimal status onto the matching error.
    pub fn ensure_optimal(&self) -> Result<()> {
        match self.status {
            SolveStatus::Optimal => Ok(()),
            SolveStatus::Infeasible => Err(DietError::Infeasible),
            SolveStatus::Unbounded => Err(DietError::Unbounded),
            SolveStatus::Error => Err(DietError::Solver(
                self.message
                    .clone()
                    .unwrap_or_else(|| "unknown solver failure".to_string()),
            )),
        }
    }
}
