//! Shared test utilities for the domain crates
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongodb", default)
//! - `TestDataBuilder`: deterministic test data
//! - `assertions`: assertion helpers
//!
//! Container-backed tests need Docker and are marked `#[ignore]`; run them with
//! `cargo test -- --ignored`.
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires Docker"]
//! async fn creates_a_store() {
//!     let mongo = TestMongo::new().await;
//!     let data = TestDataBuilder::from_test_name("creates_a_store");
//!     let db = mongo.database(&data.database_name());
//! }
//! ```

use uuid::Uuid;

#[cfg(feature = "mongodb")]
mod mongo;

#[cfg(feature = "mongodb")]
pub use mongo::TestMongo;

/// Deterministic names and ids derived from a seed, usually the test name.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("test_delete_product_cascades");
    /// assert_eq!(data.entity_id(0), TestDataBuilder::from_test_name("test_delete_product_cascades").entity_id(0));
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// The `n`-th id of this builder; stable for a given seed.
    pub fn entity_id(&self, n: u64) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[..8].copy_from_slice(&self.seed.to_le_bytes());
        bytes[8..].copy_from_slice(&n.to_le_bytes());
        Uuid::from_bytes(bytes)
    }

    /// e.g. `test-store-1234-main`
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.test", local, self.seed)
    }

    /// MongoDB database names are limited to 64 bytes and may not contain `.`
    pub fn database_name(&self) -> String {
        format!("test_{:x}", self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }

    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that a reference list no longer mentions `id`
    pub fn assert_not_referenced(refs: &[Uuid], id: Uuid, context: &str) {
        assert!(
            !refs.contains(&id),
            "{}: {} is still referenced in {:?}",
            context,
            id,
            refs
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let a = TestDataBuilder::new(42);
        let b = TestDataBuilder::new(42);

        assert_eq!(a.entity_id(3), b.entity_id(3));
        assert_eq!(a.name("store", "main"), b.name("store", "main"));
        assert_eq!(a.email("ana"), "ana.42@example.test");
    }

    #[test]
    fn test_entity_ids_differ_by_index() {
        let data = TestDataBuilder::from_test_name("my_test");
        assert_ne!(data.entity_id(0), data.entity_id(1));
    }

    #[test]
    fn test_data_builder_different_names() {
        let a = TestDataBuilder::from_test_name("test1");
        let b = TestDataBuilder::from_test_name("test2");
        assert_ne!(a.entity_id(0), b.entity_id(0));
        assert_ne!(a.database_name(), b.database_name());
    }

    #[test]
    fn test_database_name_is_valid_for_mongo() {
        let name = TestDataBuilder::new(u64::MAX).database_name();
        assert!(name.len() <= 64);
        assert!(!name.contains('.'));
    }
}
