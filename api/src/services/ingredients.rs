//! Ingredient inventory CRUD against `/ingredients/`.
//!
//! Create and update go over multipart form data so an optional image file
//! can ride along with the text fields.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Ingredient, IngredientUpdate, NewIngredient};

/// List the authenticated user's ingredients.
pub async fn list(client: &ApiClient) -> Result<Vec<Ingredient>, ApiError> {
    client.get("/ingredients/").await
}

/// Fetch a single ingredient by id.
pub async fn get(client: &ApiClient, id: &str) -> Result<Ingredient, ApiError> {
    client.get(&format!("/ingredients/{id}")).await
}

/// Create an ingredient.
pub async fn create(client: &ApiClient, ingredient: &NewIngredient) -> Result<Ingredient, ApiError> {
    client.post_form("/ingredients/", ingredient.to_form()?).await
}

/// Update an ingredient; only the fields set on `changes` are sent.
pub async fn update(
    client: &ApiClient,
    id: &str,
    changes: &IngredientUpdate,
) -> Result<Ingredient, ApiError> {
    client
        .put_form(&format!("/ingredients/{id}"), changes.to_form()?)
        .await
}

/// Delete an ingredient.
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    client.delete(&format!("/ingredients/{id}")).await
}
