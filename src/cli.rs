use std::path::PathBuf;

use clap::Parser;

use crate::interface::DEFAULT_REPORT_PATH;

/// Bundled catalog used when no file is given.
pub const DEFAULT_CATALOG_PATH: &str = "res/foods.csv";

/// CheapestDiet — finds the cheapest mix of foods that meets daily nutritional targets.
#[derive(Parser, Debug)]
#[command(name = "cheapest_diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the foods CSV (food names, price row, nutrient rows).
    #[arg(default_value = DEFAULT_CATALOG_PATH)]
    pub file: PathBuf,

    /// JSON object of constraint overrides, e.g. {"max_sodium": 1500}.
    #[arg(long, value_name = "JSON")]
    pub constraints: Option<PathBuf>,

    /// Override one constraint bound (repeatable), e.g. --set min_protein=70.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, f64)>,

    /// Where to write the model and report.
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub report: PathBuf,

    /// List the recognised constraint keys and exit.
    #[arg(long)]
    pub list_constraints: bool,
}

/// Parse `key=value` into a constraint override.
pub fn parse_override(raw: &str) -> Result<(String, f64), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((key.trim().to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("min_protein = 70").unwrap(),
            ("min_protein".to_string(), 70.0)
        );
        assert!(parse_override("min_protein").is_err());
        assert!(parse_override("min_protein=lots").is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cheapest_diet"]);
        assert_eq!(cli.file, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(cli.report, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(cli.overrides.is_empty());
    }

    #[test]
    fn test_positional_and_sets() {
        let cli = Cli::parse_from([
            "cheapest_diet",
            "my_foods.csv",
            "--set",
            "calories=1800",
            "--set",
            "max_sodium=1500",
        ]);
        assert_eq!(cli.file, PathBuf::from("my_foods.csv"));
        assert_eq!(cli.overrides.len(), 2);
        assert_eq!(cli.overrides[1], ("max_sodium".to_string(), 1500.0));
    }
}
