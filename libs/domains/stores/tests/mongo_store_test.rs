//! MongoStoreRepository against a real MongoDB (needs Docker)

use domain_stores::*;
use test_utils::{TestDataBuilder, TestMongo, assertions::assert_some};

fn create(name: &str) -> CreateStore {
    serde_json::from_value(serde_json::json!({ "name": name })).unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_store_crud_and_reference_lookup() {
    let mongo = TestMongo::new().await;
    let data = TestDataBuilder::from_test_name("test_store_crud_and_reference_lookup");
    let repo = MongoStoreRepository::new(&mongo.database(&data.database_name()));
    repo.init_indexes().await.unwrap();

    let client_id = data.entity_id(1);
    let mut store = Store::new(create(&data.name("store", "main")));
    store.clients = vec![client_id];
    let store = repo.insert(store).await.unwrap();

    let found = assert_some(repo.find_by_id(store.id).await.unwrap(), "stored store");
    assert_eq!(found, store);

    let by_client = repo.find_by_client(client_id).await.unwrap();
    assert_eq!(by_client.len(), 1);

    let updated = repo
        .update(
            store.id,
            UpdateStore {
                name: Some(data.name("store", "renamed")),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, data.name("store", "renamed"));
    assert_eq!(updated.clients, vec![client_id]);

    let removed = repo.remove(store.id).await.unwrap();
    assert!(removed.is_some());
    assert!(repo.find_by_id(store.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_store_name_is_rejected() {
    let mongo = TestMongo::new().await;
    let data = TestDataBuilder::from_test_name("test_duplicate_store_name_is_rejected");
    let repo = MongoStoreRepository::new(&mongo.database(&data.database_name()));
    repo.init_indexes().await.unwrap();

    repo.insert(Store::new(create("Same"))).await.unwrap();
    let err = repo.insert(Store::new(create("Same"))).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateName));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_of_missing_store_is_not_found() {
    let mongo = TestMongo::new().await;
    let data = TestDataBuilder::from_test_name("test_save_of_missing_store_is_not_found");
    let repo = MongoStoreRepository::new(&mongo.database(&data.database_name()));

    let err = repo.save(Store::new(create("ghost"))).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}
