pub mod render;
pub mod report;

pub use render::{display_constraint_options, display_problem_summary};
pub use report::{ReportText, ResultReporter, DEFAULT_EPSILON, DEFAULT_REPORT_PATH, DEFAULT_UNIT};
