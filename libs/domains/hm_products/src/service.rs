//! Handmade product service
//!
//! Material and model edits load the product, change it in memory and
//! write the whole document back. An unknown sub-id is reported before
//! anything is written.

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{HMProductError, HMProductResult};
use crate::models::{
    CreateHMProduct, CreateMaterial, CreateModel, HMProduct, UpdateHMProduct, UpdateMaterial,
    UpdateModel,
};
use crate::repository::HMProductRepository;

pub struct HMProductService<R: HMProductRepository> {
    repository: Arc<R>,
}

fn validate<T: Validate>(input: &T) -> HMProductResult<()> {
    input
        .validate()
        .map_err(|e| HMProductError::Validation(e.to_string()))
}

impl<R: HMProductRepository> HMProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> HMProductResult<Vec<HMProduct>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> HMProductResult<HMProduct> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(HMProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateHMProduct) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.repository.insert(HMProduct::new(input)).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateHMProduct) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.repository
            .update(id, input)
            .await?
            .ok_or(HMProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> HMProductResult<HMProduct> {
        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(HMProductError::NotFound(id))?;
        tracing::info!(hm_product_id = %id, "Deleted handmade product");
        Ok(removed)
    }

    /// Load, edit in memory, save. Returns the saved product.
    async fn edit<F>(&self, id: Uuid, apply: F) -> HMProductResult<HMProduct>
    where
        F: FnOnce(&mut HMProduct) -> HMProductResult<()> + Send,
    {
        let mut product = self.get(id).await?;
        apply(&mut product)?;
        self.repository.save(product.clone()).await?;
        Ok(product)
    }

    #[instrument(skip(self, input))]
    pub async fn add_material(&self, id: Uuid, input: CreateMaterial) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.edit(id, |product| {
            product.add_material(input);
            Ok(())
        })
        .await
    }

    #[instrument(skip(self, input))]
    pub async fn update_material(
        &self,
        id: Uuid,
        material_id: Uuid,
        input: UpdateMaterial,
    ) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.edit(id, |product| product.update_material(material_id, input))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_material(&self, id: Uuid, material_id: Uuid) -> HMProductResult<HMProduct> {
        self.edit(id, |product| product.remove_material(material_id).map(|_| ()))
            .await
    }

    #[instrument(skip(self, input))]
    pub async fn add_model(
        &self,
        id: Uuid,
        material_id: Uuid,
        input: CreateModel,
    ) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.edit(id, |product| product.add_model(material_id, input).map(|_| ()))
            .await
    }

    #[instrument(skip(self, input))]
    pub async fn update_model(
        &self,
        id: Uuid,
        material_id: Uuid,
        model_id: Uuid,
        input: UpdateModel,
    ) -> HMProductResult<HMProduct> {
        validate(&input)?;
        self.edit(id, |product| product.update_model(material_id, model_id, input))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_model(
        &self,
        id: Uuid,
        material_id: Uuid,
        model_id: Uuid,
    ) -> HMProductResult<HMProduct> {
        self.edit(id, |product| {
            product.remove_model(material_id, model_id).map(|_| ())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockHMProductRepository;
    use serde_json::json;

    fn bracelet() -> HMProduct {
        HMProduct::new(
            serde_json::from_value(json!({
                "name": "Bracelet",
                "materials": [{ "material_name": "24K Gold", "material_price": 999.99 }]
            }))
            .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_add_material_saves_whole_document() {
        let product = bracelet();
        let id = product.id;

        let mut repo = MockHMProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save()
            .withf(|p| p.materials.len() == 2 && p.materials[1].material_name == "Silver")
            .times(1)
            .returning(|_| Ok(()));

        let service = HMProductService::new(repo);
        let updated = service
            .add_material(
                id,
                CreateMaterial {
                    material_name: "Silver".to_string(),
                    material_price: 99.0,
                    models: vec![],
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.materials.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_material_is_reported_without_saving() {
        let product = bracelet();
        let id = product.id;

        let mut repo = MockHMProductRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(product.clone())));
        repo.expect_save().never();

        let service = HMProductService::new(repo);
        let err = service
            .remove_material(id, Uuid::now_v7())
            .await
            .unwrap_err();
        assert!(matches!(err, HMProductError::ValueNotFound { product_id, .. } if product_id == id));
    }

    #[tokio::test]
    async fn test_missing_parent_is_not_found() {
        let mut repo = MockHMProductRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = HMProductService::new(repo);
        let err = service
            .add_model(
                Uuid::now_v7(),
                Uuid::now_v7(),
                CreateModel {
                    model_name: "m".to_string(),
                    model_price: 1.0,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HMProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_material_is_rejected_before_lookup() {
        let service = HMProductService::new(MockHMProductRepository::new());
        let err = service
            .add_material(
                Uuid::now_v7(),
                CreateMaterial {
                    material_name: String::new(),
                    material_price: 1.0,
                    models: vec![],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, HMProductError::Validation(_)));
    }
}
