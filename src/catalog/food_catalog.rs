use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::{DietError, Result};
use crate::models::FoodItem;

/// Immutable price and nutrient table for a set of foods.
///
/// Nutrient columns are stored as `nutrient -> per-food values`, indexed by
/// the food's position in `foods`, so every nutrient always covers every food.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    foods: Vec<String>,
    index: HashMap<String, usize>,
    prices: Vec<f64>,
    nutrient_order: Vec<String>,
    content: HashMap<String, Vec<f64>>,
}

impl FoodCatalog {
    /// Build a catalog from food names, prices, and `(nutrient, values)` rows.
    ///
    /// Every row must have one value per food, in the same order as `foods`.
    pub fn from_parts(
        foods: Vec<String>,
        prices: Vec<f64>,
        nutrients: Vec<(String, Vec<f64>)>,
    ) -> Result<Self> {
        let mut index = HashMap::with_capacity(foods.len());
        for (i, name) in foods.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(DietError::InvalidCatalog(format!(
                    "food in column {} has an empty name",
                    i + 1
                )));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(DietError::InvalidCatalog(format!(
                    "duplicate food name '{}'",
                    name
                )));
            }
        }

        check_values("price", &prices, foods.len())?;

        let mut nutrient_order = Vec::with_capacity(nutrients.len());
        let mut content = HashMap::with_capacity(nutrients.len());
        let mut seen = HashSet::new();
        for (nutrient, values) in nutrients {
            if !seen.insert(nutrient.clone()) {
                return Err(DietError::InvalidCatalog(format!(
                    "nutrient '{}' listed twice",
                    nutrient
                )));
            }
            check_values(&nutrient, &values, foods.len())?;
            nutrient_order.push(nutrient.clone());
            content.insert(nutrient, values);
        }

        Ok(Self {
            foods,
            index,
            prices,
            nutrient_order,
            content,
        })
    }

    /// All food names in load order.
    pub fn all_foods(&self) -> &[String] {
        &self.foods
    }

    /// Tracked nutrient names in load order.
    pub fn nutrients(&self) -> &[String] {
        &self.nutrient_order
    }

    pub fn has_nutrient(&self, nutrient: &str) -> bool {
        self.content.contains_key(nutrient)
    }

    /// Price per unit of `food`.
    pub fn price_of(&self, food: &str) -> Result<f64> {
        let i = self.position(food)?;
        Ok(self.prices[i])
    }

    /// Amount of `nutrient` per unit of `food`.
    pub fn content_of(&self, nutrient: &str, food: &str) -> Result<f64> {
        let column = self.nutrient_values(nutrient)?;
        let i = self.position(food)?;
        Ok(column[i])
    }

    /// Prices aligned with `all_foods()`.
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Per-food amounts of `nutrient`, aligned with `all_foods()`.
    pub fn nutrient_values(&self, nutrient: &str) -> Result<&[f64]> {
        self.content
            .get(nutrient)
            .map(Vec::as_slice)
            .ok_or_else(|| DietError::UnknownNutrient(nutrient.to_string()))
    }

    /// Full row view of one food.
    pub fn item(&self, food: &str) -> Result<FoodItem> {
        let i = self.position(food)?;
        let nutrient_content: BTreeMap<String, f64> = self
            .nutrient_order
            .iter()
            .map(|n| (n.clone(), self.content[n][i]))
            .collect();
        Ok(FoodItem {
            name: self.foods[i].clone(),
            price: self.prices[i],
            nutrient_content,
        })
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    fn position(&self, food: &str) -> Result<usize> {
        self.index
            .get(food)
            .copied()
            .ok_or_else(|| DietError::UnknownFood(food.to_string()))
    }
}

fn check_values(label: &str, values: &[f64], expected: usize) -> Result<()> {
    if values.len() != expected {
        return Err(DietError::InvalidCatalog(format!(
            "'{}' has {} values but there are {} foods",
            label,
            values.len(),
            expected
        )));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(DietError::InvalidCatalog(format!(
            "'{}' contains invalid value {}",
            label, bad
        )));
    }
    Ok(())
}
