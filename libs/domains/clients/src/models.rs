use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Postal address embedded in a client. Each one has its own id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Address {
    #[serde(rename = "_id", alias = "id", default = "Uuid::now_v7")]
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub country: String,
    #[validate(length(min = 1))]
    pub zip: String,
}

/// Client document as persisted. `password` holds the argon2 hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    /// Unique across clients
    pub email: String,
    pub password: String,
    pub salt: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Uuid>,
    #[serde(default)]
    pub reservations: Vec<Uuid>,
    /// Product ids
    #[serde(default)]
    pub wishlist: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client as returned by the API (no password, no salt)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub addresses: Vec<Address>,
    pub orders: Vec<Uuid>,
    pub reservations: Vec<Uuid>,
    pub wishlist: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            addresses: client.addresses,
            orders: client.orders,
            reservations: client.reservations,
            wishlist: client.wishlist,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// DTO for creating a client.
///
/// `password` is optional here so that its absence is reported as
/// "Password Required" by the create hook rather than as a decode error.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub orders: Vec<Uuid>,
    #[serde(default)]
    pub reservations: Vec<Uuid>,
    #[serde(default)]
    pub wishlist: Vec<Uuid>,
}

/// DTO for updating a client; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateClient {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(max = 255))]
    pub email: Option<String>,
    pub password: Option<String>,
    #[validate(nested)]
    pub addresses: Option<Vec<Address>>,
    pub orders: Option<Vec<Uuid>>,
    pub reservations: Option<Vec<Uuid>>,
    pub wishlist: Option<Vec<Uuid>>,
}

/// The `$set` document produced by the update hook.
///
/// Unlike [`UpdateClient`] it never carries a plaintext password and always
/// stamps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Address>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wishlist: Option<Vec<Uuid>>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Drop `product_id` from the wishlist. Returns whether anything was removed.
    pub fn detach_wishlist_product(&mut self, product_id: Uuid) -> bool {
        let before = self.wishlist.len();
        self.wishlist.retain(|id| *id != product_id);
        self.wishlist.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address_json() -> serde_json::Value {
        json!({
            "name": "Some Name",
            "email": "some@mail.com",
            "address_line_1": "Address number etc",
            "address_line_2": "Appartment number",
            "city": "Maybe a mayor city",
            "state": "Who cares",
            "country": "PR",
            "zip": "89231"
        })
    }

    #[test]
    fn test_address_without_id_gets_one() {
        let a: Address = serde_json::from_value(address_json()).unwrap();
        let b: Address = serde_json::from_value(address_json()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_client_rejects_bad_nested_address() {
        let mut address = address_json();
        address["email"] = json!("not-an-email");
        let input: CreateClient = serde_json::from_value(json!({
            "name": "Some Name",
            "email": "some@email.com",
            "password": "arealhardpassword",
            "addresses": [address]
        }))
        .unwrap();

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_create_client_without_password_still_decodes() {
        let input: CreateClient = serde_json::from_value(json!({
            "name": "Some Name",
            "email": "some@email.com"
        }))
        .unwrap();
        assert!(input.password.is_none());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_patch_skips_absent_fields() {
        let patch = ClientPatch {
            name: Some("New".to_string()),
            email: None,
            password: None,
            salt: None,
            addresses: None,
            orders: None,
            reservations: None,
            wishlist: None,
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&patch).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name".to_string(), "updated_at".to_string()]);
    }

    #[test]
    fn test_detach_wishlist_product() {
        let product = Uuid::now_v7();
        let now = Utc::now();
        let mut client = Client {
            id: Uuid::now_v7(),
            name: "n".to_string(),
            email: "e@x.io".to_string(),
            password: "h".to_string(),
            salt: "s".to_string(),
            addresses: vec![],
            orders: vec![],
            reservations: vec![],
            wishlist: vec![product],
            created_at: now,
            updated_at: now,
        };

        assert!(client.detach_wishlist_product(product));
        assert!(client.wishlist.is_empty());
        assert!(!client.detach_wishlist_product(product));
    }

    #[test]
    fn test_response_drops_secrets() {
        let now = Utc::now();
        let client = Client {
            id: Uuid::now_v7(),
            name: "n".to_string(),
            email: "e@x.io".to_string(),
            password: "hash".to_string(),
            salt: "salt".to_string(),
            addresses: vec![],
            orders: vec![],
            reservations: vec![],
            wishlist: vec![],
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(ClientResponse::from(client)).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("salt").is_none());
    }
}
