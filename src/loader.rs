use std::time::Duration;

use log::{error, info, warn};

use crate::columns::missing_columns;
use crate::config::{resolve_url, SheetConfig};
use crate::error::LoadError;
use crate::fetcher::{CsvSource, HttpFetcher};
use crate::model::Recipe;
use crate::parser::parse_document;
use crate::summary::TypeTally;
use crate::transform::transform_rows;

/// Fetch the sheet behind `raw_url` through `source` and map it to recipes.
///
/// Steps run in order and the first failure ends the call: URL validation
/// (before any request), download, empty-body check, parse, row mapping.
/// Missing columns are only reported in the log.
pub async fn load_recipes(
    raw_url: Option<&str>,
    source: &dyn CsvSource,
) -> Result<Vec<Recipe>, LoadError> {
    let url = resolve_url(raw_url)?;
    info!("[Recipes] Fetching recipes from: {}", url);

    let result = fetch_and_map(&url, source).await;
    if let Err(e) = &result {
        error!("[Recipes] Failed to retrieve recipes: {}", e);
    }
    result
}

async fn fetch_and_map(url: &url::Url, source: &dyn CsvSource) -> Result<Vec<Recipe>, LoadError> {
    let csv_text = source.fetch_text(url).await?;
    let content = csv_text.strip_prefix('\u{feff}').unwrap_or(&csv_text);
    if content.trim().is_empty() {
        return Err(LoadError::EmptyDocument);
    }
    info!(
        "[Recipes] CSV downloaded: {} characters",
        csv_text.chars().count()
    );

    let document = parse_document(&csv_text)?;
    info!("[Recipes] Columns available in the CSV: {:?}", document.headers);

    let missing = missing_columns(&document.headers);
    if !missing.is_empty() {
        warn!("[Recipes] Missing columns: {:?}", missing);
    }

    let recipes = transform_rows(&document.rows);

    let tally = TypeTally::from_recipes(&recipes);
    info!(
        "[Recipes] {} recipes loaded ({} sweet, {} savory)",
        recipes.len(),
        tally.sweet,
        tally.savory
    );

    Ok(recipes)
}

/// Load recipes using configuration from `config.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), sheet_recipes::LoadError> {
/// let recipes = sheet_recipes::fetch_recipes_from_sheet().await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_recipes_from_sheet() -> Result<Vec<Recipe>, LoadError> {
    let config = SheetConfig::load()?;
    RecipeLoader::builder().config(config).build().await
}

/// Builder for configuring and running a recipe load
#[derive(Default)]
pub struct RecipeLoaderBuilder {
    csv_url: Option<String>,
    timeout: Option<Duration>,
    source: Option<Box<dyn CsvSource>>,
}

impl RecipeLoaderBuilder {
    /// Set the URL of the CSV document
    ///
    /// # Example
    /// ```
    /// use sheet_recipes::RecipeLoader;
    ///
    /// let builder = RecipeLoader::builder()
    ///     .csv_url("https://docs.google.com/spreadsheets/d/e/abc/pub?output=csv");
    /// ```
    pub fn csv_url(mut self, url: impl Into<String>) -> Self {
        self.csv_url = Some(url.into());
        self
    }

    /// Take the URL and timeout from a loaded [`SheetConfig`]
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.csv_url = config.csv_url;
        if let Some(secs) = config.timeout {
            self.timeout = Some(Duration::from_secs(secs));
        }
        self
    }

    /// Set a timeout for the HTTP request
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Download through a custom source instead of HTTP
    pub fn source(mut self, source: impl CsvSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Run the load
    ///
    /// # Errors
    /// Returns `LoadError` if:
    /// - No URL was configured, or it is not a valid absolute URL
    /// - The server answers with a non-success status
    /// - The document is empty
    /// - The request fails for any other reason
    pub async fn build(self) -> Result<Vec<Recipe>, LoadError> {
        match self.source {
            Some(source) => load_recipes(self.csv_url.as_deref(), source.as_ref()).await,
            None => {
                let fetcher = HttpFetcher::new(self.timeout)?;
                load_recipes(self.csv_url.as_deref(), &fetcher).await
            }
        }
    }
}

/// Main entry point for the builder API
pub struct RecipeLoader;

impl RecipeLoader {
    /// Creates a new builder for loading recipes
    pub fn builder() -> RecipeLoaderBuilder {
        RecipeLoaderBuilder::default()
    }
}
