use std::collections::BTreeMap;

/// One catalog column: a food with its unit price and per-unit nutrient content.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub name: String,

    /// Cost per unit quantity.
    pub price: f64,

    /// Nutrient name -> amount per unit quantity.
    pub nutrient_content: BTreeMap<String, f64>,
}
