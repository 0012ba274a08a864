use config::ConfigError;
use log::warn;
use sheet_recipes::{RecipeLoader, SheetConfig, TypeTally};
use std::env;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: sheet-recipes [URL] [--summary]");
    eprintln!();
    eprintln!("Without URL, SHEET_RECIPES_CSV_URL or config.toml is used.");
}

/// A broken config file only matters when it is the sole source of the URL
fn select_config(
    loaded: Result<SheetConfig, ConfigError>,
    has_url_arg: bool,
) -> Result<SheetConfig, ConfigError> {
    match loaded {
        Ok(config) => Ok(config),
        Err(e) if has_url_arg => {
            warn!("[Recipes] Ignoring unreadable configuration: {}", e);
            Ok(SheetConfig::default())
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut url = None;
    let mut summary = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--summary" => summary = true,
            "-h" | "--help" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            _ if url.is_none() && !arg.starts_with('-') => url = Some(arg),
            _ => {
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    let config = match select_config(SheetConfig::load(), url.is_some()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut builder = RecipeLoader::builder().config(config);
    if let Some(url) = url {
        builder = builder.csv_url(url);
    }

    let recipes = match builder.build().await {
        Ok(recipes) => recipes,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if summary {
        for recipe in &recipes {
            println!(
                "{}\t{}\t{}\t{} min\t{} pers.",
                recipe.id,
                recipe.nom,
                recipe.recipe_type,
                recipe.temps_preparation_min,
                recipe.nb_personnes
            );
        }
        let tally = TypeTally::from_recipes(&recipes);
        println!(
            "{} recipes ({} sweet, {} savory)",
            recipes.len(),
            tally.sweet,
            tally.savory
        );
        return ExitCode::SUCCESS;
    }

    match serde_json::to_string_pretty(&recipes) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
