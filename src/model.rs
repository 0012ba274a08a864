use serde::{Deserialize, Serialize};

/// A recipe row from the sheet, ready for display.
///
/// Text fields are trimmed. `ingredients`, `instructions` and `equipements`
/// hold `;`-separated lists exactly as written in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    /// Category label such as "sucré" or "salé"
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub difficulte: String,
    pub temps_preparation_min: u32,
    pub categorie_temps: String,
    pub nb_personnes: u32,
    pub nom: String,
    pub description_courte: String,
    pub ingredients: String,
    pub instructions: String,
    pub equipements: String,
    /// Calories for one serving; `None` when the sheet leaves the cell empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default)]
    pub image_url: Option<String>,
}
