//! Lifecycle rules applied before a product is written

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, CustomValue, Product, ProductPatch, UpdateProduct};
use crate::slug::slugify;

pub const SLUG_READ_ONLY: &str = "Slug is read-only";
pub const HANDMADE_EXCLUSIVE: &str =
    "A handmade product cannot have a description or customs";
pub const DESCRIPTION_REQUIRED: &str = "Description is required for non-handmade products";
pub const NAME_NOT_SLUGGABLE: &str = "Name must contain at least one letter or digit";

/// Slug for `name`, refusing names that leave nothing to put in the unique index.
fn derive_slug(name: &str) -> ProductResult<String> {
    let slug = slugify(name);
    if slug.is_empty() {
        return Err(ProductError::Validation(NAME_NOT_SLUGGABLE.to_string()));
    }
    Ok(slug)
}

/// A product is either described or handmade.
pub fn check_exclusivity(
    description: Option<&str>,
    customs: &[CustomValue],
    handmade_id: Option<Uuid>,
) -> ProductResult<()> {
    match handmade_id {
        Some(_) if description.is_some() || !customs.is_empty() => {
            Err(ProductError::Validation(HANDMADE_EXCLUSIVE.to_string()))
        }
        None if description.is_none() => {
            Err(ProductError::Validation(DESCRIPTION_REQUIRED.to_string()))
        }
        _ => Ok(()),
    }
}

pub fn before_create(input: CreateProduct, now: DateTime<Utc>) -> ProductResult<Product> {
    if input.slug.is_some() {
        return Err(ProductError::Validation(SLUG_READ_ONLY.to_string()));
    }
    check_exclusivity(input.description.as_deref(), &input.customs, input.handmade_id)?;
    let slug = derive_slug(&input.name)?;

    Ok(Product {
        id: Uuid::now_v7(),
        slug,
        name: input.name,
        stock: input.stock,
        description: input.description,
        images: input.images,
        customs: input.customs,
        handmade_id: input.handmade_id,
        created_at: now,
        updated_at: now,
    })
}

/// Build the patch for `current`. The slug follows a supplied name and the
/// exclusivity rule is checked on the merged result.
pub fn before_update(
    current: &Product,
    input: UpdateProduct,
    now: DateTime<Utc>,
) -> ProductResult<ProductPatch> {
    if input.slug.is_some() {
        return Err(ProductError::Validation(SLUG_READ_ONLY.to_string()));
    }

    let description = input
        .description
        .as_deref()
        .or(current.description.as_deref());
    let customs = input.customs.as_deref().unwrap_or(&current.customs);
    let handmade_id = input.handmade_id.or(current.handmade_id);
    check_exclusivity(description, customs, handmade_id)?;
    let slug = input.name.as_deref().map(derive_slug).transpose()?;

    Ok(ProductPatch {
        slug,
        name: input.name,
        stock: input.stock,
        description: input.description,
        images: input.images,
        customs: input.customs,
        handmade_id: input.handmade_id,
        updated_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use serde_json::json;

    fn create(value: serde_json::Value) -> CreateProduct {
        serde_json::from_value(value).unwrap()
    }

    fn described_product() -> Product {
        before_create(
            create(json!({
                "name": "Some product",
                "stock": 20,
                "description": "Some product description"
            })),
            Utc::now() - Duration::weeks(1),
        )
        .unwrap()
    }

    #[test]
    fn test_supplied_slug_fails_create() {
        let err = before_create(
            create(json!({ "name": "Ring", "stock": 5, "slug": "should-be-ignored" })),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == SLUG_READ_ONLY));
    }

    #[test]
    fn test_create_derives_slug_and_timestamps() {
        let now = Utc::now();
        let product = before_create(
            create(json!({ "name": "Gold Ring", "stock": 5, "description": "shiny" })),
            now,
        )
        .unwrap();

        assert_eq!(product.slug, "gold-ring");
        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, now);
    }

    #[test]
    fn test_create_requires_description_unless_handmade() {
        let err = before_create(create(json!({ "name": "Ring", "stock": 5 })), Utc::now())
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == DESCRIPTION_REQUIRED));

        let handmade = before_create(
            create(json!({ "name": "Ring", "stock": 5, "handmade_id": Uuid::now_v7() })),
            Utc::now(),
        );
        assert!(handmade.is_ok());
    }

    #[test]
    fn test_handmade_with_customs_is_rejected() {
        let err = before_create(
            create(json!({
                "name": "Ring",
                "stock": 5,
                "handmade_id": Uuid::now_v7(),
                "customs": [{ "custom_id": Uuid::now_v7(), "value": "A value" }]
            })),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == HANDMADE_EXCLUSIVE));
    }

    #[test]
    fn test_supplied_slug_fails_update() {
        let input = UpdateProduct {
            slug: Some("x".to_string()),
            ..Default::default()
        };
        let err = before_update(&described_product(), input, Utc::now()).unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == SLUG_READ_ONLY));
    }

    #[test]
    fn test_update_recomputes_slug_only_with_name() {
        let current = described_product();
        let now = Utc::now();

        let renamed = UpdateProduct {
            name: Some("Brand New Name".to_string()),
            ..Default::default()
        };
        let patch = before_update(&current, renamed, now).unwrap();
        assert_eq!(patch.slug.as_deref(), Some("brand-new-name"));
        assert_eq!(patch.updated_at, now);

        let restock = UpdateProduct {
            stock: Some(3),
            ..Default::default()
        };
        let patch = before_update(&current, restock, now).unwrap();
        assert!(patch.slug.is_none());
        assert_eq!(patch.updated_at, now);
    }

    #[test]
    fn test_create_rejects_name_without_letters_or_digits() {
        let err = before_create(
            create(json!({ "name": "!!!", "stock": 1, "description": "d" })),
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == NAME_NOT_SLUGGABLE));
    }

    #[test]
    fn test_create_slugs_non_latin_names() {
        let product = before_create(
            create(json!({ "name": "Колье", "stock": 1, "description": "d" })),
            Utc::now(),
        )
        .unwrap();
        assert!(!product.slug.is_empty());
        assert_eq!(product.slug, slugify("Колье"));
    }

    #[test]
    fn test_rename_to_unsluggable_name_fails() {
        let input = UpdateProduct {
            name: Some(" - ".to_string()),
            ..Default::default()
        };
        let err = before_update(&described_product(), input, Utc::now()).unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == NAME_NOT_SLUGGABLE));
    }

    #[test]
    fn test_update_checks_merged_document() {
        let input = UpdateProduct {
            handmade_id: Some(Uuid::now_v7()),
            ..Default::default()
        };
        let err = before_update(&described_product(), input, Utc::now()).unwrap_err();
        assert!(matches!(err, ProductError::Validation(msg) if msg == HANDMADE_EXCLUSIVE));
    }
}
