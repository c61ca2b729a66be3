//! Typed representations of the backend's request and response payloads.

mod ingredient;
mod recipe;
mod user;

pub use ingredient::{ImageFile, Ingredient, IngredientUpdate, NewIngredient};
pub use recipe::{
    GenerateItem, GeneratedRecipe, RecipeIngredient, RecipeListItem, RecipeStep, SavedRecipe,
    SavedRecipeIngredient,
};
pub(crate) use recipe::{GenerateRequest, GenerateResponse, SaveRecipeIngredient, SaveRecipeRequest};
pub use user::User;
