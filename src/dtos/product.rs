// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::product::Product;
use crate::photo;

/// Body of create and update requests. Keys follow the existing client wire
/// format, with English aliases accepted.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(rename = "nombre", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "precio", alias = "price")]
    pub price: Option<f64>,
    #[serde(rename = "descripcion", alias = "description")]
    pub description: Option<String>,
    #[serde(rename = "disponibilidad", alias = "availability")]
    pub availability: Option<bool>,
    #[serde(rename = "foto", alias = "photo")]
    pub photo: Option<String>,
}

/// A request that passed presence checks, with the photo already decoded to
/// the bytes that get stored.
#[derive(Debug, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub availability: Option<bool>,
    pub photo: Option<Vec<u8>>,
}

impl ProductRequest {
    /// Create: every field but availability is mandatory, the photo included.
    pub fn into_new_product(self) -> Result<ProductFields, AppError> {
        let (name, price, description) = self.required_fields()?;
        let encoded = required_text(self.photo, "foto")?;
        let photo = photo::decode(&encoded)?;

        Ok(ProductFields {
            name,
            price,
            description,
            availability: self.availability,
            photo: Some(photo),
        })
    }

    /// Update replaces the whole row, so a missing photo clears the stored one.
    pub fn into_replacement(self) -> Result<ProductFields, AppError> {
        let (name, price, description) = self.required_fields()?;
        let photo = photo::decode_optional(self.photo.as_deref())?;

        Ok(ProductFields {
            name,
            price,
            description,
            availability: self.availability,
            photo,
        })
    }

    fn required_fields(&self) -> Result<(String, f64, String), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.name) {
            missing.push("nombre");
        }
        if self.price.is_none() {
            missing.push("precio");
        }
        if is_blank(&self.description) {
            missing.push("descripcion");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All fields are required, missing: {}",
                missing.join(", ")
            )));
        }

        Ok((
            self.name.clone().unwrap_or_default(),
            self.price.unwrap_or_default(),
            self.description.clone().unwrap_or_default(),
        ))
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("All fields are required, missing: {field}"))),
    }
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "disponibilidad")]
    pub availability: Option<bool>,
    #[serde(rename = "foto")]
    pub photo: Option<String>,
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
            availability: product.availability,
            photo: photo::encode_optional(product.photo.as_deref()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
