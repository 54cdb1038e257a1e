//! Item creation input.
//!
//! `ItemForm` is what an admin types (all text); `NewItem` is the typed payload
//! the catalog store accepts.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

use super::error::ValidationError;
use super::item::{Item, ItemStatus};

/// Typed creation payload. Id and status are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
}

impl NewItem {
    /// Check the required fields: name, description, price, primary image.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ValidationError::InvalidPrice(self.price.to_string()));
        }
        require("imageUrl", &self.image_url)?;
        Ok(())
    }

    /// Materialize the item under `id`. New items always start inactive.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
            gallery_urls: self.gallery_urls,
            status: ItemStatus::Inactive,
        }
    }
}

/// Raw admin form fields.
///
/// `price` is free text and `gallery_urls` is a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
    pub gallery_urls: String,
}

impl ItemForm {
    pub fn parse(&self) -> Result<NewItem, ValidationError> {
        let name = require("name", &self.name)?;
        let description = require("description", &self.description)?;
        let price_text = require("price", &self.price)?;
        let image_url = require("imageUrl", &self.image_url)?;

        let price: f64 = price_text
            .parse()
            .map_err(|_| ValidationError::InvalidPrice(price_text.to_string()))?;

        let item = NewItem {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: image_url.to_string(),
            gallery_urls: split_gallery(&self.gallery_urls),
        };
        item.validate()?;
        Ok(item)
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}

fn split_gallery(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
