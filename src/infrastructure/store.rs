// Object Store - in-memory record storage keyed by (kind, object id)
// Stands in for the persistence backend; records are serialized documents.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{bail, Result};
use tokio::sync::RwLock;

use crate::core::{EntityKind, ObjectId};

/// One persisted record: its kind, identifier and serialized document
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub kind: EntityKind,
    pub id: ObjectId,
    pub data: Vec<u8>,
}

/// In-memory record store shared across the model layer
#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: Arc<RwLock<HashMap<(EntityKind, ObjectId), StoredObject>>>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the record identified by (kind, id)
    pub async fn put(&self, kind: EntityKind, id: ObjectId, data: Vec<u8>) -> Result<()> {
        if !id.is_valid() {
            bail!("object identifier must be non-empty");
        }
        tracing::debug!(kind = %kind, id = %id, bytes = data.len(), "store write");
        let mut objects = self.objects.write().await;
        objects.insert(
            (kind.clone(), id.clone()),
            StoredObject { kind, id, data },
        );
        Ok(())
    }

    pub async fn get(&self, kind: &EntityKind, id: &ObjectId) -> Result<Option<StoredObject>> {
        let objects = self.objects.read().await;
        Ok(objects.get(&(kind.clone(), id.clone())).cloned())
    }

    /// Remove a record, reporting whether it existed
    pub async fn remove(&self, kind: &EntityKind, id: &ObjectId) -> Result<bool> {
        let mut objects = self.objects.write().await;
        Ok(objects.remove(&(kind.clone(), id.clone())).is_some())
    }

    pub async fn contains(&self, kind: &EntityKind, id: &ObjectId) -> Result<bool> {
        let objects = self.objects.read().await;
        Ok(objects.contains_key(&(kind.clone(), id.clone())))
    }

    /// Number of stored records of one kind
    pub async fn count(&self, kind: &EntityKind) -> Result<usize> {
        let objects = self.objects.read().await;
        Ok(objects.keys().filter(|(k, _)| k == kind).count())
    }
}
