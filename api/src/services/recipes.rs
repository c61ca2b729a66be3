//! Recipe generation and persistence against `/recipes/`.
//!
//! Generation is a single POST whose response is a list of candidate
//! recipes; the backend currently returns one and this module surfaces the
//! first. Saving serializes the step list into the `instructions` JSON blob
//! the backend persists verbatim.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    GenerateItem, GenerateRequest, GenerateResponse, GeneratedRecipe, RecipeListItem, SavedRecipe,
    SaveRecipeIngredient, SaveRecipeRequest,
};

/// Generate a recipe from the selected inventory items.
pub async fn generate(
    client: &ApiClient,
    ingredients: &[GenerateItem],
) -> Result<GeneratedRecipe, ApiError> {
    let request = GenerateRequest {
        ingredients: ingredients.to_vec(),
    };
    let response: GenerateResponse = client.post("/recipes/generate", &request).await?;
    response
        .recipes
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::MalformedResponse("no recipes in response".to_string()))
}

/// Persist a generated recipe.
///
/// Steps become the `instructions` JSON blob; ingredients keep their list
/// position as `order`.
pub async fn save(client: &ApiClient, recipe: &GeneratedRecipe) -> Result<SavedRecipe, ApiError> {
    let instructions =
        serde_json::to_string(&recipe.steps).map_err(|e| ApiError::Other(e.to_string()))?;
    let ingredients = recipe
        .ingredients
        .iter()
        .enumerate()
        .map(|(order, ingredient)| SaveRecipeIngredient {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.clone(),
            order: order as u32,
        })
        .collect();
    let request = SaveRecipeRequest {
        name: recipe.name.clone(),
        instructions,
        ingredients,
    };
    client.post("/recipes/save", &request).await
}

/// List the authenticated user's saved recipes.
pub async fn list(client: &ApiClient) -> Result<Vec<RecipeListItem>, ApiError> {
    client.get("/recipes/").await
}

/// Fetch a saved recipe by id.
pub async fn get(client: &ApiClient, id: &str) -> Result<SavedRecipe, ApiError> {
    client.get(&format!("/recipes/{id}")).await
}

/// Delete a saved recipe.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/recipes/{id}")).await
}
