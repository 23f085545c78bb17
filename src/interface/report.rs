use std::fmt;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::Result;
use crate::models::{SolveStatus, Solution};

/// Default report file, written to the working directory.
pub const DEFAULT_REPORT_PATH: &str = "HealthyDiet.lp";

/// Quantities smaller than this are reported as zero.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Unit label printed after each quantity.
pub const DEFAULT_UNIT: &str = "pounds";

/// Rendered report text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportText(String);

impl ReportText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for ReportText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Formats a `Solution` for people and writes it out.
#[derive(Debug, Clone)]
pub struct ResultReporter {
    pub epsilon: f64,
    pub unit: String,
}

impl Default for ResultReporter {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            unit: DEFAULT_UNIT.to_string(),
        }
    }
}

impl ResultReporter {
    /// Status line, one line per food, then the daily cost.
    ///
    /// Non-optimal solves get an explanation instead of quantities.
    pub fn report(&self, solution: &Solution) -> ReportText {
        let mut lines = vec![format!("Status: {}", solution.status)];

        match solution.status {
            SolveStatus::Optimal => {
                for (food, quantity) in &solution.quantities {
                    let shown = if quantity.abs() < self.epsilon { 0.0 } else { *quantity };
                    lines.push(format!("{} = {:.4} {}", food, shown, self.unit));
                }
                lines.push(format!("Cost/day = ${:.2}", solution.total_cost));
            }
            SolveStatus::Infeasible => lines.push(
                "No diet satisfies the nutritional targets with the given foods.".to_string(),
            ),
            SolveStatus::Unbounded => lines.push("The diet cost is unbounded.".to_string()),
            SolveStatus::Error => lines.push("The solver failed.".to_string()),
        }
        if !solution.is_optimal() {
            if let Some(message) = &solution.message {
                lines.push(format!("Reason: {}", message));
            }
        }

        let mut text = lines.join("\n");
        text.push('\n');
        ReportText(text)
    }

    /// File content: the model text followed by the report.
    pub fn artifact(model_text: &str, report: &ReportText) -> ReportText {
        let mut text = String::with_capacity(model_text.len() + report.0.len() + 1);
        text.push_str(model_text);
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push('\n');
        text.push_str(&report.0);
        ReportText(text)
    }

    /// Write `report` to `destination` atomically.
    ///
    /// Content goes to a temporary file next to the destination, which is then
    /// renamed over it; on failure the destination is left untouched.
    pub fn persist(&self, report: &ReportText, destination: &Path) -> Result<()> {
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(report.0.as_bytes())?;
        tmp.flush()?;
        tmp.persist(destination).map_err(|e| e.error)?;

        info!(path = %destination.display(), "report written");
        Ok(())
    }

    /// Print the report to stdout.
    pub fn display(&self, report: &ReportText) {
        println!();
        print!("{}", report);
    }
}
