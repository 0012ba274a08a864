use std::collections::HashMap;

/// Header of the optional identifier column
pub const ID_HEADER: &str = "ID";

/// The columns the sheet is expected to carry, one per `Recipe` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Type,
    Difficulte,
    TempsPreparation,
    CategorieTemps,
    NbPersonnes,
    Nom,
    DescriptionCourte,
    Ingredients,
    Instructions,
    Equipements,
    Calories,
    ImageUrl,
}

impl Column {
    /// Every expected column, in sheet order
    pub const ALL: [Column; 12] = [
        Column::Type,
        Column::Difficulte,
        Column::TempsPreparation,
        Column::CategorieTemps,
        Column::NbPersonnes,
        Column::Nom,
        Column::DescriptionCourte,
        Column::Ingredients,
        Column::Instructions,
        Column::Equipements,
        Column::Calories,
        Column::ImageUrl,
    ];

    /// Exact header text used as the lookup key
    pub fn header(&self) -> &'static str {
        match self {
            Column::Type => "Type (sucré/salé)",
            Column::Difficulte => "Difficulté (Facile/Moyen/Difficile)",
            Column::TempsPreparation => "Temps de préparation (min)",
            Column::CategorieTemps => "Catégorie temps (sélection)",
            Column::NbPersonnes => "Nombre de personnes",
            Column::Nom => "Nom de la recette",
            Column::DescriptionCourte => "Description courte",
            Column::Ingredients => "Ingrédients + quantités (séparés par ;)",
            Column::Instructions => "Instructions (étapes séparées par ;)",
            Column::Equipements => "Équipements nécessaires (séparés par ;)",
            Column::Calories => "Calories (pour une portion)",
            Column::ImageUrl => "image_url",
        }
    }
}

/// One parsed CSV line keyed by header text.
///
/// A header maps to `None` when the line is shorter than the header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, Option<String>>,
}

impl RawRow {
    pub fn new(cells: HashMap<String, Option<String>>) -> Self {
        Self { cells }
    }

    /// Raw cell value, untrimmed
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).and_then(|cell| cell.as_deref())
    }

    /// Trimmed cell value for an expected column, `""` when absent
    pub fn text(&self, column: Column) -> &str {
        self.get(column.header()).map(str::trim).unwrap_or_default()
    }

    /// Trimmed identifier, if the row has a non-empty `ID` cell
    pub fn id(&self) -> Option<&str> {
        self.get(ID_HEADER)
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let cells = iter
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect();
        Self { cells }
    }
}

/// Expected headers that do not appear in `headers`, in table order
pub fn missing_columns<S: AsRef<str>>(headers: &[S]) -> Vec<&'static str> {
    Column::ALL
        .iter()
        .map(Column::header)
        .filter(|expected| !headers.iter().any(|h| h.as_ref() == *expected))
        .collect()
}
