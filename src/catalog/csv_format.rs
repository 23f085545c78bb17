use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use strsim::jaro_winkler;
use tracing::{debug, trace, warn};

use crate::catalog::FoodCatalog;
use crate::error::{DietError, Result};

/// Row labels accepted for the price row.
pub const PRICE_LABELS: [&str; 2] = ["price", "cost"];

/// Canonical names of the nutrients the default constraints refer to.
pub const STANDARD_NUTRIENTS: [&str; 6] = [
    "calories",
    "saturated fat",
    "sodium",
    "vitamin c",
    "vitamin a",
    "protein",
];

/// Shorthand labels mapped to their canonical nutrient name.
const LABEL_ALIASES: [(&str, &str); 6] = [
    ("calorie", "calories"),
    ("kcal", "calories"),
    ("sat fat", "saturated fat"),
    ("saturated fats", "saturated fat"),
    ("vit c", "vitamin c"),
    ("vit a", "vitamin a"),
];

/// Similarity above which an unrecognised label is reported as a likely typo.
const TYPO_SIMILARITY: f64 = 0.9;

/// Normalise a row label: lower-case, drop parenthesised units, collapse
/// separators, then resolve aliases.
///
/// `"Vitamin_A (mcg)"` becomes `"vitamin a"`.
pub fn normalize_label(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut depth = 0usize;
    for c in raw.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '_' | '-' if depth == 0 => stripped.push(' '),
            _ if depth == 0 => stripped.extend(c.to_lowercase()),
            _ => {}
        }
    }
    let label = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    LABEL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(label)
}

/// Which nutrient rows a catalog file must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogLayout {
    /// Price plus every row in `STANDARD_NUTRIENTS`; extra rows are allowed.
    #[default]
    Standard,
    /// Price plus any nutrient rows, for custom constraint sets.
    Custom,
}

/// Load a catalog in the standard layout from a CSV file.
///
/// The first row lists food names (cell 0 is ignored). The next row must be
/// the price row; every following row is a nutrient row identified by its
/// label, so nutrient rows may appear in any order.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    load_catalog_with(path, CatalogLayout::Standard)
}

/// Load a catalog from a CSV file, checking rows against `layout`.
pub fn load_catalog_with<P: AsRef<Path>>(path: P, layout: CatalogLayout) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let catalog = read_catalog_with(file, layout)?;
    debug!(
        path = %path.display(),
        foods = catalog.len(),
        nutrients = catalog.nutrients().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a standard-layout catalog from any CSV reader.
pub fn read_catalog<R: Read>(reader: R) -> Result<FoodCatalog> {
    read_catalog_with(reader, CatalogLayout::Standard)
}

/// Parse a catalog from any CSV reader, checking rows against `layout`.
pub fn read_catalog_with<R: Read>(reader: R, layout: CatalogLayout) -> Result<FoodCatalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        rows.push(record?);
    }

    if rows.len() < 2 {
        return Err(DietError::parse(
            rows.len().max(1),
            "expected a food header row followed by a price row",
        ));
    }

    let header = &rows[0];
    let foods = parse_header(header)?;
    let width = header.len();

    let mut prices = Vec::new();
    let mut nutrients: Vec<(String, Vec<f64>)> = Vec::new();
    let mut seen_labels = HashSet::new();

    for (i, record) in rows.iter().enumerate().skip(1) {
        let row = i + 1;

        if record.len() != width {
            return Err(DietError::parse(
                row,
                format!("expected {} columns, found {}", width, record.len()),
            ));
        }

        let raw_label = record.get(0).unwrap_or_default();
        let label = normalize_label(raw_label);
        if label.is_empty() {
            return Err(DietError::parse(row, "missing row label"));
        }

        let is_price = PRICE_LABELS.contains(&label.as_str());
        if row == 2 && !is_price {
            return Err(DietError::parse(
                row,
                format!("expected the price row, found '{}'", raw_label),
            ));
        }
        let key = if is_price { PRICE_LABELS[0].to_string() } else { label };
        if !seen_labels.insert(key.clone()) {
            return Err(DietError::parse(row, format!("duplicate row '{}'", raw_label)));
        }

        let values = parse_values(row, record)?;
        if is_price {
            prices = values;
        } else {
            warn_if_typo(row, &key);
            nutrients.push((key, values));
        }
    }

    for standard in STANDARD_NUTRIENTS {
        if nutrients.iter().any(|(n, _)| n == standard) {
            continue;
        }
        match layout {
            CatalogLayout::Standard => {
                return Err(DietError::parse(
                    rows.len(),
                    format!(
                        "missing '{}' row (expected {} data rows)",
                        standard,
                        STANDARD_NUTRIENTS.len() + 1
                    ),
                ));
            }
            CatalogLayout::Custom => {
                debug!(nutrient = standard, "catalog does not track standard nutrient");
            }
        }
    }

    let catalog = FoodCatalog::from_parts(foods, prices, nutrients)?;
    for food in catalog.all_foods() {
        let item = catalog.item(food)?;
        trace!(
            food = %item.name,
            price = item.price,
            nutrients = ?item.nutrient_content,
            "catalog row"
        );
    }
    Ok(catalog)
}

fn parse_header(header: &csv::StringRecord) -> Result<Vec<String>> {
    let foods: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    if foods.is_empty() {
        return Err(DietError::parse(1, "header lists no foods"));
    }

    let mut seen = HashSet::new();
    for (col, name) in foods.iter().enumerate() {
        if name.is_empty() {
            return Err(DietError::parse(
                1,
                format!("column {} has an empty food name", col + 2),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(DietError::parse(1, format!("duplicate food name '{}'", name)));
        }
    }
    Ok(foods)
}

fn parse_values(row: usize, record: &csv::StringRecord) -> Result<Vec<f64>> {
    record
        .iter()
        .enumerate()
        .skip(1)
        .map(|(col, cell)| {
            let value: f64 = cell.parse().map_err(|_| {
                DietError::parse(
                    row,
                    format!("column {}: '{}' is not a number", col + 1, cell),
                )
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(DietError::parse(
                    row,
                    format!("column {}: {} must be a finite, non-negative number", col + 1, cell),
                ));
            }
            Ok(value)
        })
        .collect()
}

fn warn_if_typo(row: usize, label: &str) {
    if STANDARD_NUTRIENTS.contains(&label) {
        return;
    }
    let closest = STANDARD_NUTRIENTS
        .iter()
        .map(|n| (*n, jaro_winkler(n, label)))
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    match closest {
        Some((name, score)) if score >= TYPO_SIMILARITY => {
            warn!(row, label, suggestion = name, "unrecognised nutrient label looks like a typo");
        }
        _ => debug!(row, label, "tracking extra nutrient"),
    }
}

/// Write a catalog back out in the same layout it is loaded from.
pub fn write_catalog<W: Write>(catalog: &FoodCatalog, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["food".to_string()];
    header.extend(catalog.all_foods().iter().cloned());
    wtr.write_record(&header)?;

    wtr.write_record(row_cells(PRICE_LABELS[0], catalog.prices()))?;
    for nutrient in catalog.nutrients() {
        wtr.write_record(row_cells(nutrient, catalog.nutrient_values(nutrient)?))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a catalog to a CSV file.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let file = File::create(path)?;
    write_catalog(catalog, file)
}

fn row_cells(label: &str, values: &[f64]) -> Vec<String> {
    std::iter::once(label.to_string())
        .chain(values.iter().map(|v| v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_label() {
        assert_eq!(normalize_label("Vitamin_A (mcg)"), "vitamin a");
        assert_eq!(normalize_label("  Saturated   Fat (g) "), "saturated fat");
        assert_eq!(normalize_label("Sat-Fat"), "saturated fat");
        assert_eq!(normalize_label("Calories"), "calories");
        assert_eq!(normalize_label("(units)"), "");
    }

    #[test]
    fn test_read_minimal_table() {
        let csv = "food,Rice,Beans\nPrice,0.5,1.0\nCalories,600,450\nProtein (g),12,30\n";
        let catalog = read_catalog_with(csv.as_bytes(), CatalogLayout::Custom).unwrap();
        assert_eq!(catalog.all_foods(), ["Rice", "Beans"]);
        assert_eq!(catalog.price_of("Beans").unwrap(), 1.0);
        assert_eq!(catalog.content_of("protein", "Rice").unwrap(), 12.0);
    }

    #[test]
    fn test_price_row_must_come_first() {
        let csv = "food,Rice\nCalories,600\nPrice,0.5\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DietError::Parse { row: 2, .. }));
    }

    #[test]
    fn test_duplicate_label_rejected() {
        let csv = "food,Rice\nPrice,0.5\nSodium,5\nsodium (mg),6\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DietError::Parse { row: 4, .. }));
    }

    #[test]
    fn test_negative_value_rejected() {
        let csv = "food,Rice\nPrice,0.5\nSodium,-5\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DietError::Parse { row: 3, .. }));
    }

    #[test]
    fn test_standard_layout_requires_every_nutrient_row() {
        let csv = "food,Rice,Beans\nPrice,0.5,1.0\nCalories,600,450\nProtein (g),12,30\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        match err {
            DietError::Parse { row, message } => {
                assert_eq!(row, 4);
                assert!(message.contains("missing 'saturated fat' row"), "{}", message);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_header_only_rejected() {
        let csv = "food,Rice,Beans\n";
        let err = read_catalog(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DietError::Parse { row: 1, .. }));
    }
}
