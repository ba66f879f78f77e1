mod loader;
mod store;

pub use loader::{load_catalog, parse_catalog_csv};
pub use store::FoodCatalog;
