use std::collections::BTreeMap;

use clap::Parser;
use tracing::debug;

use cheapest_diet_rs::cli::Cli;
use cheapest_diet_rs::constraints::{load_overrides, NutritionalConstraints};
use cheapest_diet_rs::error::Result;
use cheapest_diet_rs::interface::{
    display_constraint_options, display_problem_summary, ResultReporter,
};
use cheapest_diet_rs::logging;
use cheapest_diet_rs::planner::{CheapestDiet, MicroLpSolver};

fn main() {
    logging::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_constraints {
        display_constraint_options();
        return Ok(());
    }

    // File overrides first, then --set on top
    let mut overrides = BTreeMap::new();
    if let Some(path) = &cli.constraints {
        overrides.extend(load_overrides(path)?);
    }
    overrides.extend(cli.overrides.iter().cloned());
    debug!(?overrides, "constraint overrides");

    let constraints = NutritionalConstraints::with_defaults(overrides)?;
    let diet = CheapestDiet::load(&cli.file, constraints)?;
    display_problem_summary(diet.catalog(), diet.constraints());

    let outcome = diet.calculate(&MicroLpSolver)?;

    let reporter = ResultReporter::default();
    let report = reporter.report(&outcome.solution);
    reporter.display(&report);

    let artifact = ResultReporter::artifact(&outcome.model_text, &report);
    reporter.persist(&artifact, &cli.report)?;

    outcome.solution.ensure_optimal()?;

    println!();
    println!("Finished with success!");
    Ok(())
}
