// Entity Trait - common identity and CRUD operations for persisted models
// Single trait providing both entity identity and templated persistence

use async_trait::async_trait;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::{EntityKind, ObjectId};
use crate::error::{AppError, AppResult};
use crate::framework::timestamps::Timestamps;
use crate::infrastructure::store::ObjectStore;

/// Entity trait that all persisted models implement.
/// Provides entity identity plus common CRUD operations templated for all
/// model types; persistence goes through the [`ObjectStore`] passed in.
#[async_trait]
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Entity kind name used as the store namespace and reference discriminator
    const KIND: &'static str;

    fn kind() -> EntityKind {
        EntityKind::new_unchecked(Self::KIND)
    }

    /// Persisted identifier; `None` until the first successful save
    fn object_id(&self) -> Option<&ObjectId>;

    /// Assign the identifier chosen at first save
    fn set_object_id(&mut self, id: ObjectId);

    /// Validate according to schema constraints; a non-empty list of
    /// problems rejects the write
    fn validate(&self) -> AppResult<Vec<String>>;

    /// Short human-readable label used when this record is the target of a
    /// resolved reference
    fn display_label(&self) -> String;

    /// Timestamp pair stamped on save, for models that carry one
    fn timestamps_mut(&mut self) -> Option<&mut Timestamps> {
        None
    }

    // --- Common CRUD operations (templated for all entities) ---

    /// Serialize entity to its stored document form
    fn serialize_to_bytes(&self) -> AppResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| AppError::SerializationError(e.to_string()))
    }

    /// Deserialize entity from its stored document form
    fn deserialize_from_bytes(data: &[u8]) -> AppResult<Self> {
        serde_json::from_slice(data).map_err(|e| AppError::DeserializationError(e.to_string()))
    }

    /// Persist this entity. Assigns an identifier on first save and stamps
    /// timestamps; validation runs before anything is written, so a
    /// rejected entity is never partially persisted.
    async fn save(&mut self, store: &ObjectStore) -> AppResult<ObjectId> {
        let problems = self.validate()?;
        if !problems.is_empty() {
            tracing::warn!(kind = Self::KIND, "rejected write: {}", problems.join(", "));
            return Err(AppError::Validation(format!(
                "validation failed: {}",
                problems.join(", ")
            )));
        }

        if self.object_id().is_none() {
            self.set_object_id(ObjectId::random());
        }
        if let Some(stamps) = self.timestamps_mut() {
            stamps.stamp(Utc::now());
        }

        let id = match self.object_id() {
            Some(id) => id.clone(),
            None => {
                return Err(AppError::Validation(
                    "object identifier missing after assignment".to_string(),
                ))
            }
        };
        let data = self.serialize_to_bytes()?;
        store.put(Self::kind(), id.clone(), data).await?;
        Ok(id)
    }

    /// Load with nullable identifier - returns None if absent or not found
    async fn gen_nullable(
        store: &ObjectStore,
        object_id: Option<&ObjectId>,
    ) -> AppResult<Option<Self>> {
        match object_id {
            Some(id) => match store.get(&Self::kind(), id).await? {
                Some(record) => Ok(Some(Self::deserialize_from_bytes(&record.data)?)),
                None => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// Load with enforcement - errors if not found
    async fn gen_enforce(store: &ObjectStore, object_id: &ObjectId) -> AppResult<Self> {
        Self::gen_nullable(store, Some(object_id))
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("{} with id {} not found", Self::KIND, object_id))
            })
    }

    /// Delete by identifier, reporting whether a record existed
    async fn delete(store: &ObjectStore, object_id: &ObjectId) -> AppResult<bool> {
        Ok(store.remove(&Self::kind(), object_id).await?)
    }

    async fn exists(store: &ObjectStore, object_id: &ObjectId) -> AppResult<bool> {
        Ok(store.contains(&Self::kind(), object_id).await?)
    }
}
