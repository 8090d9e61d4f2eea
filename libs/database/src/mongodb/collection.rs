use futures::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Document, doc, from_document, to_document},
    options::{IndexOptions, ReturnDocument},
};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::DocumentStoreResult;

/// Filter matching a single document by its `_id`.
///
/// Every value is encoded through `to_document`/`from_document`, which store a
/// `Uuid` as its hyphenated string, so ids are matched in that form too.
pub fn id_filter(id: Uuid) -> Document {
    doc! { "_id": id.to_string() }
}

/// Typed access to one MongoDB collection.
///
/// This is the document store adapter every domain repository is built on:
/// `find_all`, `find_by_id`, `insert`, `find_by_id_and_update`,
/// `find_by_id_and_remove`, plus `find_many` and `replace` for cascades and
/// sub-document edits.
pub struct DocumentCollection<T> {
    inner: Collection<Document>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentCollection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> DocumentCollection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(db: &Database, name: &str) -> Self {
        Self {
            inner: db.collection::<Document>(name),
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Create a unique index on `field`. Idempotent.
    pub async fn ensure_unique_index(&self, field: &str) -> DocumentStoreResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.inner.create_index(index).await?;
        debug!(collection = self.name(), field, "unique index ensured");
        Ok(())
    }

    /// Create a plain (multikey when `field` is an array) index on `field`. Idempotent.
    pub async fn ensure_index(&self, field: &str) -> DocumentStoreResult<()> {
        let index = IndexModel::builder().keys(doc! { field: 1 }).build();
        self.inner.create_index(index).await?;
        debug!(collection = self.name(), field, "index ensured");
        Ok(())
    }

    #[instrument(skip(self), fields(collection = self.name()))]
    pub async fn find_all(&self) -> DocumentStoreResult<Vec<T>> {
        self.find_many(Document::new()).await
    }

    #[instrument(skip(self), fields(collection = self.name()))]
    pub async fn find_many(&self, filter: Document) -> DocumentStoreResult<Vec<T>> {
        let cursor = self.inner.find(filter).await?;
        let raw: Vec<Document> = cursor.try_collect().await?;
        raw.into_iter()
            .map(|d| from_document(d).map_err(Into::into))
            .collect()
    }

    #[instrument(skip(self), fields(collection = self.name()))]
    pub async fn find_by_id(&self, id: Uuid) -> DocumentStoreResult<Option<T>> {
        match self.inner.find_one(id_filter(id)).await? {
            Some(raw) => Ok(Some(from_document(raw)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip(self, document), fields(collection = self.name()))]
    pub async fn insert(&self, document: &T) -> DocumentStoreResult<()> {
        self.inner.insert_one(to_document(document)?).await?;
        Ok(())
    }

    /// `$set` every field of `patch` and return the document as it is after the update.
    ///
    /// `None` fields of the patch must be skipped by its `Serialize` impl; an
    /// empty patch is a plain lookup.
    #[instrument(skip(self, patch), fields(collection = self.name()))]
    pub async fn find_by_id_and_update<P>(&self, id: Uuid, patch: &P) -> DocumentStoreResult<Option<T>>
    where
        P: Serialize + Sync,
    {
        let set = to_document(patch)?;
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        let updated = self
            .inner
            .find_one_and_update(id_filter(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        match updated {
            Some(raw) => Ok(Some(from_document(raw)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the stored document. Returns false when no document has `id`.
    #[instrument(skip(self, document), fields(collection = self.name()))]
    pub async fn replace(&self, id: Uuid, document: &T) -> DocumentStoreResult<bool> {
        let result = self
            .inner
            .replace_one(id_filter(id), to_document(document)?)
            .await?;
        Ok(result.matched_count > 0)
    }

    /// Delete by id, returning the removed document.
    #[instrument(skip(self), fields(collection = self.name()))]
    pub async fn find_by_id_and_remove(&self, id: Uuid) -> DocumentStoreResult<Option<T>> {
        match self.inner.find_one_and_delete(id_filter(id)).await? {
            Some(raw) => Ok(Some(from_document(raw)?)),
            None => Ok(None),
        }
    }
}
