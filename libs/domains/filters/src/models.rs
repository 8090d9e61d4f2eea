use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Filter {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// The custom field this filter exposes; unique
    pub custom_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateFilter {
    pub custom_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFilter {
    pub custom_id: Option<Uuid>,
}

/// `$set` document for an update; always stamps `updated_at`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

impl Filter {
    pub fn new(input: CreateFilter, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            custom_id: input.custom_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl FilterPatch {
    pub fn new(input: UpdateFilter, now: DateTime<Utc>) -> Self {
        Self {
            custom_id: input.custom_id,
            updated_at: now,
        }
    }
}
