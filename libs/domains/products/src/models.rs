use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product image with its focal point (CSS lengths such as `50%` or `2px`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Image {
    #[validate(length(min = 1))]
    pub url: String,
    pub x: String,
    pub y: String,
}

/// Value of a store custom field for this product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomValue {
    pub custom_id: Uuid,
    pub value: String,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// Always `slugify(name)`; unique
    pub slug: String,
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub customs: Vec<CustomValue>,
    /// Set only for handmade products, which carry no description or customs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handmade_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a product.
///
/// `slug` is accepted only so that supplying it can be rejected.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Read-only; any value is rejected
    #[serde(default)]
    pub slug: Option<String>,
    #[validate(range(min = 0))]
    pub stock: i32,
    #[serde(default)]
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub customs: Vec<CustomValue>,
    #[serde(default)]
    pub handmade_id: Option<Uuid>,
}

/// DTO for updating a product; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    /// Read-only; any value is rejected
    pub slug: Option<String>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(nested)]
    pub images: Option<Vec<Image>>,
    pub customs: Option<Vec<CustomValue>>,
    pub handmade_id: Option<Uuid>,
}

/// `$set` document produced by the update hook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs: Option<Vec<CustomValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handmade_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn is_handmade(&self) -> bool {
        self.handmade_id.is_some()
    }
}
