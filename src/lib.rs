//! Load recipes from a spreadsheet published as CSV.
//!
//! ```no_run
//! use sheet_recipes::RecipeLoader;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), sheet_recipes::LoadError> {
//! let recipes = RecipeLoader::builder()
//!     .csv_url("https://docs.google.com/spreadsheets/d/e/abc/pub?output=csv")
//!     .build()
//!     .await?;
//! for recipe in &recipes {
//!     println!("{} ({})", recipe.nom, recipe.recipe_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod columns;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod loader;
pub mod model;
pub mod parser;
pub mod summary;
pub mod transform;

pub use config::SheetConfig;
pub use error::LoadError;
pub use fetcher::{CsvSource, HttpFetcher};
pub use loader::{fetch_recipes_from_sheet, load_recipes, RecipeLoader, RecipeLoaderBuilder};
pub use model::Recipe;
pub use summary::TypeTally;
