use std::panic::{self, AssertUnwindSafe};

use microlp::{ComparisonOp, OptimizationDirection, Problem, Variable};
use tracing::{debug, warn};

use crate::models::{Relation, SolveStatus, Solution};
use crate::planner::model::LinearProgramSpec;

/// Anything that can solve a `LinearProgramSpec`.
///
/// The program is consumed: one spec, one solve.
pub trait LpSolver {
    fn solve(&self, lp: LinearProgramSpec) -> Solution;
}

/// Simplex solver backed by the `microlp` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicroLpSolver;

impl LpSolver for MicroLpSolver {
    fn solve(&self, lp: LinearProgramSpec) -> Solution {
        // Rows with no contributing variable reduce to `0 <relation> rhs`.
        if let Some(row) = lp
            .rows()
            .iter()
            .find(|r| r.is_empty() && !r.relation.holds(0.0, r.rhs, 0.0))
        {
            debug!(row = %row.name, "row cannot be satisfied by any food");
            return Solution::failed(
                SolveStatus::Infeasible,
                Some(format!(
                    "no food contributes to '{}' ({} {} {})",
                    row.name, row.nutrient, row.relation, row.rhs
                )),
            );
        }

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let vars: Vec<Variable> = lp
            .variables()
            .iter()
            .zip(lp.objective())
            .map(|(v, cost)| problem.add_var(*cost, (v.lower, v.upper)))
            .collect();

        for row in lp.rows().iter().filter(|r| !r.is_empty()) {
            let expr: Vec<(Variable, f64)> = vars
                .iter()
                .copied()
                .zip(row.coefficients.iter().copied())
                .filter(|(_, c)| *c != 0.0)
                .collect();
            problem.add_constraint(expr, comparison(row.relation), row.rhs);
        }

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| problem.solve()));
        match outcome {
            Ok(Ok(solved)) => {
                let values: Vec<f64> = vars.iter().map(|var| solved[*var].max(0.0)).collect();
                check_solution(&lp, &values, solved.objective());

                let quantities = lp
                    .variables()
                    .iter()
                    .zip(values)
                    .map(|(v, value)| (v.food.clone(), value))
                    .collect();
                Solution::optimal(quantities, solved.objective())
            }
            Ok(Err(microlp::Error::Infeasible)) => Solution::failed(SolveStatus::Infeasible, None),
            Ok(Err(microlp::Error::Unbounded)) => Solution::failed(SolveStatus::Unbounded, None),
            Ok(Err(other)) => {
                warn!(error = %other, "solver failed");
                Solution::failed(SolveStatus::Error, Some(other.to_string()))
            }
            Err(_) => {
                warn!("solver panicked");
                Solution::failed(
                    SolveStatus::Error,
                    Some("solver aborted unexpectedly".to_string()),
                )
            }
        }
    }
}

/// Relative tolerance for re-checking an optimal assignment.
const CHECK_TOLERANCE: f64 = 1e-6;

/// Re-evaluate an optimal assignment against the program and log any drift.
///
/// Returns the number of discrepancies found.
fn check_solution(lp: &LinearProgramSpec, values: &[f64], objective: f64) -> usize {
    let mut issues = 0;
    let row_tolerance = CHECK_TOLERANCE * lp.rows().iter().map(|r| r.rhs.abs()).fold(1.0, f64::max);

    for row in lp.violated_rows(values, row_tolerance) {
        warn!(
            row = %row.name,
            activity = row.activity(values),
            rhs = row.rhs,
            "optimal solution violates constraint row"
        );
        issues += 1;
    }

    let recomputed = lp.objective_value(values);
    if (recomputed - objective).abs() > CHECK_TOLERANCE * objective.abs().max(1.0) {
        warn!(
            solver = objective,
            recomputed, "solver objective differs from recomputed cost"
        );
        issues += 1;
    }

    debug!(issues, "optimal solution checked");
    issues
}

fn comparison(relation: Relation) -> ComparisonOp {
    match relation {
        Relation::Eq => ComparisonOp::Eq,
        Relation::Le => ComparisonOp::Le,
        Relation::Ge => ComparisonOp::Ge,
    }
}
