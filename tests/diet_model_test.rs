#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cheapest_diet_rs::catalog::{FoodCatalog, STANDARD_NUTRIENTS};
use cheapest_diet_rs::constraints::NutritionalConstraints;
use cheapest_diet_rs::error::DietError;
use cheapest_diet_rs::models::{NutritionalConstraint, Relation, SolveStatus, Solution};
use cheapest_diet_rs::planner::{build_model, CheapestDiet, LpSolver, MicroLpSolver};

const TOLERANCE: f64 = 1e-6;

/// Build a catalog from `(name, price, [calories, sat fat, sodium, vit C, vit A, protein])`.
fn build_catalog(foods: &[(&str, f64, [f64; 6])]) -> FoodCatalog {
    let names = foods.iter().map(|(n, _, _)| n.to_string()).collect();
    let prices = foods.iter().map(|(_, p, _)| *p).collect();
    let nutrients = STANDARD_NUTRIENTS
        .iter()
        .enumerate()
        .map(|(i, nutrient)| {
            (
                nutrient.to_string(),
                foods.iter().map(|(_, _, content)| content[i]).collect(),
            )
        })
        .collect();
    FoodCatalog::from_parts(names, prices, nutrients).unwrap()
}

fn minimal_catalog() -> FoodCatalog {
    build_catalog(&[
        ("A", 1.0, [2000.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ("B", 2.0, [0.0, 0.0, 0.0, 90.0, 700.0, 56.0]),
    ])
}

fn solve(catalog: &FoodCatalog, constraints: &NutritionalConstraints) -> Solution {
    let lp = build_model(catalog, constraints).unwrap();
    MicroLpSolver.solve(lp)
}

fn nutrient_total(catalog: &FoodCatalog, nutrient: &str, solution: &Solution) -> f64 {
    solution
        .quantities
        .iter()
        .map(|(food, q)| catalog.content_of(nutrient, food).unwrap() * q)
        .sum()
}

fn assert_solution_properties(catalog: &FoodCatalog, constraints: &NutritionalConstraints, solution: &Solution) {
    assert_eq!(solution.status, SolveStatus::Optimal);

    for (food, quantity) in &solution.quantities {
        assert!(*quantity >= 0.0, "{} has negative quantity {}", food, quantity);
    }

    let cost: f64 = solution
        .quantities
        .iter()
        .map(|(food, q)| catalog.price_of(food).unwrap() * q)
        .sum();
    assert_float_absolute_eq!(solution.total_cost, cost, TOLERANCE * cost.max(1.0));

    for constraint in constraints.iter() {
        let total = nutrient_total(catalog, &constraint.nutrient, solution);
        let tolerance = TOLERANCE * constraint.bound.max(1.0);
        assert!(
            constraint.is_satisfied_by(total, tolerance),
            "{} violated: total {}",
            constraint,
            total
        );
    }
}

#[test]
fn test_minimal_catalog_uses_both_foods() {
    let catalog = minimal_catalog();
    let constraints = NutritionalConstraints::default();
    let solution = solve(&catalog, &constraints);

    assert_solution_properties(&catalog, &constraints, &solution);
    assert_float_absolute_eq!(solution.quantity_of("A").unwrap(), 1.0, TOLERANCE);
    assert_float_absolute_eq!(solution.quantity_of("B").unwrap(), 1.0, TOLERANCE);
    assert_float_absolute_eq!(solution.total_cost, 3.0, TOLERANCE);
    assert_float_absolute_eq!(
        nutrient_total(&catalog, "calories", &solution),
        2000.0,
        TOLERANCE * 2000.0
    );
}

#[test]
fn test_no_vitamin_c_source_is_infeasible() {
    let catalog = build_catalog(&[
        ("Rice", 0.9, [1650.0, 0.8, 23.0, 0.0, 0.0, 30.0]),
        ("Carrots", 0.8, [186.0, 0.1, 313.0, 0.0, 3800.0, 4.2]),
        ("Chicken", 3.5, [545.0, 1.4, 300.0, 0.0, 40.0, 102.0]),
    ]);
    let solution = solve(&catalog, &NutritionalConstraints::default());
    assert_eq!(solution.status, SolveStatus::Infeasible);
    assert!(matches!(solution.ensure_optimal(), Err(DietError::Infeasible)));
}

#[test]
fn test_conflicting_caps_are_infeasible() {
    // Every calorie source carries too much sodium.
    let catalog = build_catalog(&[
        ("Chips", 1.0, [2500.0, 2.0, 5000.0, 0.0, 0.0, 30.0]),
        ("Pill", 0.5, [0.0, 0.0, 0.0, 100.0, 800.0, 60.0]),
    ]);
    let solution = solve(&catalog, &NutritionalConstraints::default());
    assert_eq!(solution.status, SolveStatus::Infeasible);
}

#[test]
fn test_missing_nutrient_is_rejected_before_solving() {
    let catalog = FoodCatalog::from_parts(
        vec!["Rice".to_string()],
        vec![0.9],
        vec![("calories".to_string(), vec![1650.0])],
    )
    .unwrap();
    let constraints = NutritionalConstraints::default();

    let err = CheapestDiet::new(catalog.clone(), constraints.clone()).unwrap_err();
    assert!(matches!(err, DietError::UnknownNutrient(_)));

    let err = build_model(&catalog, &constraints).unwrap_err();
    assert!(matches!(err, DietError::MissingNutrient { .. }));
}

#[test]
fn test_overrides_change_the_optimum() {
    let catalog = minimal_catalog();
    let constraints = NutritionalConstraints::with_defaults([("calories", 3000.0)]).unwrap();
    let solution = solve(&catalog, &constraints);

    assert_solution_properties(&catalog, &constraints, &solution);
    assert_float_absolute_eq!(solution.quantity_of("A").unwrap(), 1.5, TOLERANCE);
}

#[test]
fn test_custom_nutrient_needs_no_builder_change() {
    let catalog = FoodCatalog::from_parts(
        vec!["Bran".to_string(), "Bread".to_string()],
        vec![2.0, 1.0],
        vec![
            ("calories".to_string(), vec![1000.0, 1200.0]),
            ("fiber".to_string(), vec![200.0, 30.0]),
        ],
    )
    .unwrap();
    let constraints = NutritionalConstraints::new(vec![
        NutritionalConstraint::new("calories", "calories", Relation::Eq, 2000.0),
        NutritionalConstraint::new("min_fiber", "fiber", Relation::Ge, 100.0),
    ])
    .unwrap();

    let solution = solve(&catalog, &constraints);
    assert_solution_properties(&catalog, &constraints, &solution);
    assert!(solution.quantity_of("Bran").unwrap() > 0.0);
    assert!(solution.quantity_of("Bread").unwrap() > 0.0);
}

#[test]
fn test_random_catalogs_satisfy_solution_properties() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..25 {
        // A clean calorie source and a clean supplement keep every instance feasible.
        let mut foods = vec![
            ("Staple".to_string(), rng.gen_range(0.5..2.0), [2000.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            ("Supplement".to_string(), rng.gen_range(1.0..4.0), [0.0, 0.0, 0.0, 90.0, 700.0, 56.0]),
        ];
        for i in 0..rng.gen_range(1..6) {
            foods.push((
                format!("Food {}", i),
                rng.gen_range(0.1..5.0),
                [
                    rng.gen_range(0.0..2500.0),
                    rng.gen_range(0.0..15.0),
                    rng.gen_range(0.0..2000.0),
                    rng.gen_range(0.0..150.0),
                    rng.gen_range(0.0..2000.0),
                    rng.gen_range(0.0..120.0),
                ],
            ));
        }
        let rows: Vec<(&str, f64, [f64; 6])> = foods
            .iter()
            .map(|(n, p, c)| (n.as_str(), *p, *c))
            .collect();
        let catalog = build_catalog(&rows);
        let constraints = NutritionalConstraints::default();

        let solution = solve(&catalog, &constraints);
        assert_solution_properties(&catalog, &constraints, &solution);

        // Never worse than the two clean foods alone.
        let baseline = catalog.price_of("Staple").unwrap() + catalog.price_of("Supplement").unwrap();
        assert!(solution.total_cost <= baseline + TOLERANCE);
    }
}

#[test]
fn test_bundled_catalog_has_optimal_diet() {
    cheapest_diet_rs::logging::init_test();

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/res/foods.csv");
    let diet = CheapestDiet::load(path, NutritionalConstraints::default()).unwrap();
    let outcome = diet.calculate(&MicroLpSolver).unwrap();

    assert_solution_properties(diet.catalog(), diet.constraints(), &outcome.solution);
    assert_eq!(outcome.solution.quantities.len(), diet.catalog().len());
    assert!(outcome.model_text.starts_with("\\* Cheapest Healthy Diet *\\"));
}
