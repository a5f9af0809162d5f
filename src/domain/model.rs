use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(rename = "cookTime")]
    pub prep_time: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(rename = "requiredItems")]
    pub required_items: Vec<RequiredItem>,
}

/// A named cookbook item. The variant is fixed when the entry is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => &ingredient.name,
            Entry::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Entry::Recipe(recipe) => Some(recipe),
            Entry::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Entry::Ingredient(ingredient) => Some(ingredient),
            Entry::Recipe(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub name: String,
    pub quantity: u64,
}

/// Fully expanded view of a recipe, as returned by `/summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientAmount>,
}

impl RecipeSummary {
    pub fn quantity_of(&self, ingredient: &str) -> Option<u64> {
        self.ingredients
            .iter()
            .find(|amount| amount.name == ingredient)
            .map(|amount| amount.quantity)
    }
}
