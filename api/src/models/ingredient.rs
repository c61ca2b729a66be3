use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Inventory ingredient owned by the backend.
///
/// `quantity` is string-encoded and qualified by `unit` (e.g. `"250"` +
/// `"g"`), mirroring how the backend stores it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub unit: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// An image attached to an ingredient, uploaded as a multipart file part.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    fn to_part(&self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|e| ApiError::Other(e.to_string()))
    }
}

/// Payload for creating an ingredient.
///
/// The backend takes these as multipart form data so the optional image can
/// ride along in the same request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewIngredient {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub image: Option<ImageFile>,
}

impl NewIngredient {
    pub(crate) fn to_form(&self) -> Result<Form, ApiError> {
        let mut form = Form::new()
            .text("name", self.name.clone())
            .text("quantity", self.quantity.clone())
            .text("unit", self.unit.clone());
        if let Some(image) = &self.image {
            form = form.part("image", image.to_part()?);
        }
        Ok(form)
    }
}

/// Partial update of an ingredient; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientUpdate {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub image: Option<ImageFile>,
}

impl IngredientUpdate {
    pub(crate) fn to_form(&self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        if let Some(name) = &self.name {
            form = form.text("name", name.clone());
        }
        if let Some(quantity) = &self.quantity {
            form = form.text("quantity", quantity.clone());
        }
        if let Some(unit) = &self.unit {
            form = form.text("unit", unit.clone());
        }
        if let Some(image) = &self.image {
            form = form.part("image", image.to_part()?);
        }
        Ok(form)
    }
}
