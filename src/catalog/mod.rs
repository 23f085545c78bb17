mod csv_format;
mod food_catalog;

pub use csv_format::{
    load_catalog, load_catalog_with, normalize_label, read_catalog, read_catalog_with,
    save_catalog, write_catalog, CatalogLayout, PRICE_LABELS, STANDARD_NUTRIENTS,
};
pub use food_catalog::FoodCatalog;
