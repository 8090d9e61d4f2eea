use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::error::{HMProductError, HMProductResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Model {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub model_name: String,
    pub model_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Material {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub material_name: String,
    pub material_price: f64,
    #[serde(default)]
    pub models: Vec<Model>,
}

/// Handmade product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HMProduct {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Unique across handmade products
    pub name: String,
    #[serde(default)]
    pub materials: Vec<Material>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateModel {
    #[validate(length(min = 1))]
    pub model_name: String,
    #[validate(range(min = 0.0))]
    pub model_price: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateModel {
    #[validate(length(min = 1))]
    pub model_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub model_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMaterial {
    #[validate(length(min = 1))]
    pub material_name: String,
    #[validate(range(min = 0.0))]
    pub material_price: f64,
    #[serde(default)]
    #[validate(nested)]
    pub models: Vec<CreateModel>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMaterial {
    #[validate(length(min = 1))]
    pub material_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub material_price: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateHMProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub materials: Vec<CreateMaterial>,
}

/// Renames a handmade product. Materials are edited through their own routes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateHMProduct {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
}

impl From<CreateModel> for Model {
    fn from(input: CreateModel) -> Self {
        Self {
            id: Uuid::now_v7(),
            model_name: input.model_name,
            model_price: input.model_price,
        }
    }
}

impl From<CreateMaterial> for Material {
    fn from(input: CreateMaterial) -> Self {
        Self {
            id: Uuid::now_v7(),
            material_name: input.material_name,
            material_price: input.material_price,
            models: input.models.into_iter().map(Model::from).collect(),
        }
    }
}

impl Material {
    fn model_index(&self, product_id: Uuid, model_id: Uuid) -> HMProductResult<usize> {
        self.models
            .iter()
            .position(|m| m.id == model_id)
            .ok_or(HMProductError::ValueNotFound {
                value_id: model_id,
                product_id,
            })
    }
}

impl HMProduct {
    pub fn new(input: CreateHMProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            materials: input.materials.into_iter().map(Material::from).collect(),
        }
    }

    fn material_index(&self, material_id: Uuid) -> HMProductResult<usize> {
        self.materials
            .iter()
            .position(|m| m.id == material_id)
            .ok_or(HMProductError::ValueNotFound {
                value_id: material_id,
                product_id: self.id,
            })
    }

    pub fn add_material(&mut self, input: CreateMaterial) -> Uuid {
        let material = Material::from(input);
        let id = material.id;
        self.materials.push(material);
        id
    }

    /// Merge the supplied fields into a material
    pub fn update_material(&mut self, material_id: Uuid, input: UpdateMaterial) -> HMProductResult<()> {
        let idx = self.material_index(material_id)?;
        let material = &mut self.materials[idx];
        if let Some(name) = input.material_name {
            material.material_name = name;
        }
        if let Some(price) = input.material_price {
            material.material_price = price;
        }
        Ok(())
    }

    pub fn remove_material(&mut self, material_id: Uuid) -> HMProductResult<Material> {
        let idx = self.material_index(material_id)?;
        Ok(self.materials.remove(idx))
    }

    pub fn add_model(&mut self, material_id: Uuid, input: CreateModel) -> HMProductResult<Uuid> {
        let idx = self.material_index(material_id)?;
        let model = Model::from(input);
        let id = model.id;
        self.materials[idx].models.push(model);
        Ok(id)
    }

    pub fn update_model(
        &mut self,
        material_id: Uuid,
        model_id: Uuid,
        input: UpdateModel,
    ) -> HMProductResult<()> {
        let product_id = self.id;
        let idx = self.material_index(material_id)?;
        let material = &mut self.materials[idx];
        let model_idx = material.model_index(product_id, model_id)?;
        let model = &mut material.models[model_idx];
        if let Some(name) = input.model_name {
            model.model_name = name;
        }
        if let Some(price) = input.model_price {
            model.model_price = price;
        }
        Ok(())
    }

    pub fn remove_model(&mut self, material_id: Uuid, model_id: Uuid) -> HMProductResult<Model> {
        let product_id = self.id;
        let idx = self.material_index(material_id)?;
        let material = &mut self.materials[idx];
        let model_idx = material.model_index(product_id, model_id)?;
        Ok(material.models.remove(model_idx))
    }
}
