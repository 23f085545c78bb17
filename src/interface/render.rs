use crate::catalog::FoodCatalog;
use crate::constraints::{NutritionalConstraints, CONSTRAINT_OPTIONS};

/// Display the recognised constraint overrides with their defaults.
pub fn display_constraint_options() {
    println!();
    println!("=== Constraint options ===");
    println!();

    let key_width = CONSTRAINT_OPTIONS.iter().map(|o| o.key.len()).max().unwrap_or(10);

    for option in &CONSTRAINT_OPTIONS {
        println!(
            "  {:<width$}  {} {:>7} {:<4}  {}",
            option.key,
            option.relation,
            option.default,
            option.unit,
            option.description,
            width = key_width
        );
    }

    println!();
}

/// Display what is about to be optimised.
pub fn display_problem_summary(catalog: &FoodCatalog, constraints: &NutritionalConstraints) {
    println!(
        "Loaded {} foods tracking {} nutrients",
        catalog.len(),
        catalog.nutrients().len()
    );

    if constraints.is_empty() {
        println!("No nutritional constraints.");
        return;
    }

    println!("Constraints:");
    for constraint in constraints.iter() {
        println!("  {:<18} {}", constraint.name, constraint);
    }
}
