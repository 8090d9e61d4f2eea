//! Handmade product sub-document edits against a real MongoDB (needs Docker)

use domain_hm_products::*;
use test_utils::assertions::assert_uuid_eq;
use test_utils::{TestDataBuilder, TestMongo};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_material_and_model_edits_persist() {
    let mongo = TestMongo::new().await;
    let data = TestDataBuilder::from_test_name("test_material_and_model_edits_persist");
    let repo = MongoHMProductRepository::new(&mongo.database(&data.database_name()));
    repo.init_indexes().await.unwrap();
    let service = HMProductService::new(repo);

    let input: CreateHMProduct =
        serde_json::from_value(serde_json::json!({ "name": "Bracelet" })).unwrap();
    let product = service.create(input).await.unwrap();

    let product = service
        .add_material(
            product.id,
            CreateMaterial {
                material_name: "24K Gold".to_string(),
                material_price: 999.99,
                models: vec![],
            },
        )
        .await
        .unwrap();
    let material_id = product.materials[0].id;

    let product = service
        .add_model(
            product.id,
            material_id,
            CreateModel {
                model_name: "Thin".to_string(),
                model_price: 10.0,
            },
        )
        .await
        .unwrap();
    let model_id = product.materials[0].models[0].id;

    let reloaded = service.get(product.id).await.unwrap();
    assert_uuid_eq(reloaded.materials[0].models[0].id, model_id, "nested model id");

    let after = service
        .remove_model(product.id, material_id, model_id)
        .await
        .unwrap();
    assert!(after.materials[0].models.is_empty());
    assert!(service.get(product.id).await.unwrap().materials[0].models.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_name_is_conflict() {
    let mongo = TestMongo::new().await;
    let data = TestDataBuilder::from_test_name("test_hm_duplicate_name_is_conflict");
    let repo = MongoHMProductRepository::new(&mongo.database(&data.database_name()));
    repo.init_indexes().await.unwrap();
    let service = HMProductService::new(repo);

    let input = || -> CreateHMProduct {
        serde_json::from_value(serde_json::json!({ "name": "Bracelet" })).unwrap()
    };
    service.create(input()).await.unwrap();
    assert!(matches!(
        service.create(input()).await,
        Err(HMProductError::DuplicateName)
    ));
}
