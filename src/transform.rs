use crate::columns::{Column, RawRow};
use crate::model::Recipe;
use log::warn;

/// Map parsed rows to recipes, dropping rows without a name.
///
/// Generated ids use the row's 1-based position in `rows`, so a recipe keeps
/// the same `R_n` whether or not rows before it were dropped.
pub fn transform_rows(rows: &[RawRow]) -> Vec<Recipe> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| transform_row(index, row))
        .collect()
}

/// Build the recipe for the row at `index`, or `None` when it has no name
pub fn transform_row(index: usize, row: &RawRow) -> Option<Recipe> {
    let nom = row.text(Column::Nom);
    if nom.is_empty() {
        return None;
    }

    let id = match row.id() {
        Some(id) => id.to_string(),
        None => format!("R_{}", index + 1),
    };

    Some(Recipe {
        id,
        recipe_type: row.text(Column::Type).to_string(),
        difficulte: row.text(Column::Difficulte).to_string(),
        temps_preparation_min: parse_count(row.text(Column::TempsPreparation)),
        categorie_temps: row.text(Column::CategorieTemps).to_string(),
        nb_personnes: parse_count(row.text(Column::NbPersonnes)),
        nom: nom.to_string(),
        description_courte: row.text(Column::DescriptionCourte).to_string(),
        ingredients: row.text(Column::Ingredients).to_string(),
        instructions: row.text(Column::Instructions).to_string(),
        equipements: row.text(Column::Equipements).to_string(),
        calories: parse_calories(row.text(Column::Calories)),
        image_url: Some(row.text(Column::ImageUrl).to_string()),
    })
}

/// Parse a whole-number cell; empty, negative or non-numeric text gives `0`
pub fn parse_count(text: &str) -> u32 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    if let Ok(n) = text.parse::<u32>() {
        return n;
    }
    match parse_decimal(text) {
        Some(n) if (0.0..=u32::MAX as f64).contains(&n) => n.trunc() as u32,
        _ => 0,
    }
}

/// Parse the calories cell; an empty cell means "not provided", not zero
pub fn parse_calories(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let calories = parse_decimal(text);
    if calories.is_none() {
        warn!("[Recipes] Ignoring non-numeric calories value: {:?}", text);
    }
    calories
}

// Sheets configured for French locales export "350,5". A comma followed by
// three digits ("1,200") is a thousands separator and is rejected.
fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = match text.split_once(',') {
        None => text.to_string(),
        Some((whole, fraction))
            if !whole.contains('.')
                && (1..=2).contains(&fraction.len())
                && fraction.bytes().all(|b| b.is_ascii_digit()) =>
        {
            format!("{}.{}", whole, fraction)
        }
        Some(_) => return None,
    };
    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}
