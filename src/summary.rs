use crate::model::Recipe;

/// How many recipes look sweet and how many look savory.
///
/// Matching is loose substring containment on the lower-cased type, so a
/// label can count on both sides or on neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeTally {
    pub sweet: usize,
    pub savory: usize,
}

impl TypeTally {
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        recipes.iter().fold(Self::default(), |mut tally, recipe| {
            let kind = recipe.recipe_type.trim().to_lowercase();
            if is_sweet(&kind) {
                tally.sweet += 1;
            }
            if is_savory(&kind) {
                tally.savory += 1;
            }
            tally
        })
    }
}

// "sucr" covers sucré, sucrée and sucree
fn is_sweet(kind: &str) -> bool {
    kind.contains("sucr")
}

// "sal" covers salé, salée and sale
fn is_savory(kind: &str) -> bool {
    kind.contains("sal")
}
