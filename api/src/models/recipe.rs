//! # Recipe payloads
//!
//! Two families of types share this module:
//!
//! - **Generated recipes** — the ephemeral output of the AI generation
//!   endpoint. The generation wire format uses the backend's Portuguese field
//!   names (`nome`, `quantidade`, `numero`, `descricao`, `listaIngredientes`,
//!   `passos`, `listaReceitas`, and `Ingrediente`/`qtd` on the request side);
//!   the Rust structs keep English names and map with `#[serde(rename)]`.
//! - **Saved recipes** — the persisted entity. Its `instructions` column is a
//!   JSON blob of the step list, written by [`SaveRecipeRequest`] and parsed
//!   back by [`SavedRecipe::steps`].

use serde::{Deserialize, Serialize};

/// One ingredient line of a generated recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "quantidade")]
    pub quantity: String,
}

/// One numbered preparation step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeStep {
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "descricao")]
    pub description: String,
}

/// A recipe produced by the generation endpoint.
///
/// Exists only in memory between generation and an explicit save; discarded
/// if the user navigates away without saving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedRecipe {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "listaIngredientes")]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(rename = "passos")]
    pub steps: Vec<RecipeStep>,
}

/// One selected inventory item sent to the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateItem {
    #[serde(rename = "Ingrediente")]
    pub name: String,
    #[serde(rename = "qtd")]
    pub quantity: String,
}

impl GenerateItem {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}

impl From<&super::Ingredient> for GenerateItem {
    fn from(ingredient: &super::Ingredient) -> Self {
        Self::new(
            ingredient.name.clone(),
            format!("{} {}", ingredient.quantity, ingredient.unit),
        )
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest {
    #[serde(rename = "listaIngredientes")]
    pub ingredients: Vec<GenerateItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(rename = "listaReceitas")]
    pub recipes: Vec<GeneratedRecipe>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveRecipeRequest {
    pub name: String,
    /// JSON blob of the step list, in the generation wire format.
    pub instructions: String,
    pub ingredients: Vec<SaveRecipeIngredient>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveRecipeIngredient {
    pub name: String,
    pub quantity: String,
    pub order: u32,
}

/// Persisted recipe ingredient row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedRecipeIngredient {
    pub id: String,
    pub recipe_id: String,
    pub name: String,
    pub quantity: String,
    pub order: u32,
}

/// Persisted recipe as returned by the save and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedRecipe {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub instructions: String,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
    pub recipe_ingredients: Vec<SavedRecipeIngredient>,
}

impl SavedRecipe {
    /// Parse the instructions blob back into the ordered step list.
    pub fn steps(&self) -> Result<Vec<RecipeStep>, serde_json::Error> {
        serde_json::from_str(&self.instructions)
    }
}

/// Summary row from the recipe list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeListItem {
    pub id: String,
    pub name: String,
    pub created_at: String,
    pub ingredients_count: u32,
}
