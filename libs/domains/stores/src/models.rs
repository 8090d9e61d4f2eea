use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Booking window of a store, in days from today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CalendarConfig {
    pub nearest_available_date: u32,
    pub furthest_available_date: u32,
    /// Longest single reservation
    pub maximum_reservation: u32,
}

/// Store entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Store {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Unique across stores
    pub name: String,
    #[serde(default)]
    pub products: Vec<Uuid>,
    #[serde(default)]
    pub hm_products: Vec<Uuid>,
    #[serde(default)]
    pub texts: Vec<Uuid>,
    #[serde(default)]
    pub pictures: Vec<Uuid>,
    #[serde(default)]
    pub customs: Vec<Uuid>,
    #[serde(default)]
    pub filters: Vec<Uuid>,
    #[serde(default)]
    pub orders: Vec<Uuid>,
    #[serde(default)]
    pub clients: Vec<Uuid>,
    #[serde(default)]
    pub reservations: Vec<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

/// DTO for creating a store
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateStore {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub products: Vec<Uuid>,
    #[serde(default)]
    pub hm_products: Vec<Uuid>,
    #[serde(default)]
    pub texts: Vec<Uuid>,
    #[serde(default)]
    pub pictures: Vec<Uuid>,
    #[serde(default)]
    pub customs: Vec<Uuid>,
    #[serde(default)]
    pub filters: Vec<Uuid>,
    #[serde(default)]
    pub orders: Vec<Uuid>,
    #[serde(default)]
    pub clients: Vec<Uuid>,
    #[serde(default)]
    pub reservations: Vec<Uuid>,
    #[serde(default)]
    pub calendar: Option<CalendarConfig>,
}

/// Partial update; only supplied fields change.
///
/// Serializes without its `None` fields so it can be `$set` as is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateStore {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hm_products: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texts: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pictures: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,
}

impl Store {
    pub fn new(input: CreateStore) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            products: input.products,
            hm_products: input.hm_products,
            texts: input.texts,
            pictures: input.pictures,
            customs: input.customs,
            filters: input.filters,
            orders: input.orders,
            clients: input.clients,
            reservations: input.reservations,
            calendar: input.calendar,
        }
    }

    /// Drop `client_id` from `clients`. Returns whether anything was removed.
    pub fn detach_client(&mut self, client_id: Uuid) -> bool {
        let before = self.clients.len();
        self.clients.retain(|id| *id != client_id);
        self.clients.len() != before
    }

    /// Drop `product_id` from `products`. Returns whether anything was removed.
    pub fn detach_product(&mut self, product_id: Uuid) -> bool {
        let before = self.products.len();
        self.products.retain(|id| *id != product_id);
        self.products.len() != before
    }
}
