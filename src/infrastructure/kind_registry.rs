//! A registry mapping entity kinds to the loaders used to resolve typed
//! references.
//!
//! This module provides the centralized lookup behind reference resolution:
//! a reference stores only (kind, object id), and the registry supplies the
//! per-kind loader that turns the pair into a concrete record. Kinds that
//! were never registered cannot be resolved.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::core::{EntityKind, ObjectId};
use crate::error::AppResult;
use crate::framework::entity::Entity;
use crate::infrastructure::store::ObjectStore;

/// A record obtained by resolving a typed reference
pub trait ResolvedObject: Send + Sync {
    fn kind(&self) -> EntityKind;
    fn object_id(&self) -> Option<&ObjectId>;
    fn display_label(&self) -> String;
}

impl<E: Entity> ResolvedObject for E {
    fn kind(&self) -> EntityKind {
        E::kind()
    }

    fn object_id(&self) -> Option<&ObjectId> {
        Entity::object_id(self)
    }

    fn display_label(&self) -> String {
        Entity::display_label(self)
    }
}

/// Loads records of one kind from the store
#[async_trait]
pub trait ObjectLoader: Send + Sync {
    async fn load(
        &self,
        store: &ObjectStore,
        object_id: &ObjectId,
    ) -> AppResult<Option<Box<dyn ResolvedObject>>>;
}

/// Generic loader for any registered entity type
struct EntityLoader<E> {
    _entity: PhantomData<fn() -> E>,
}

impl<E> EntityLoader<E> {
    fn new() -> Self {
        Self {
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: Entity> ObjectLoader for EntityLoader<E> {
    async fn load(
        &self,
        store: &ObjectStore,
        object_id: &ObjectId,
    ) -> AppResult<Option<Box<dyn ResolvedObject>>> {
        let entity = E::gen_nullable(store, Some(object_id)).await?;
        Ok(entity.map(|e| Box::new(e) as Box<dyn ResolvedObject>))
    }
}

/// Manages the mapping of entity kinds to their loaders
#[derive(Clone, Default)]
pub struct KindRegistry {
    loaders: Arc<RwLock<HashMap<EntityKind, Arc<dyn ObjectLoader>>>>,
}

impl KindRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity type as resolvable under its kind
    pub async fn register<E: Entity>(&self) {
        let mut loaders = self.loaders.write().await;
        loaders.insert(E::kind(), Arc::new(EntityLoader::<E>::new()));
    }

    /// Retrieve the loader for a kind, if one was registered
    pub async fn loader_for(&self, kind: &EntityKind) -> Option<Arc<dyn ObjectLoader>> {
        let loaders = self.loaders.read().await;
        loaders.get(kind).cloned()
    }

    /// Kinds currently known to the registry
    pub async fn registered_kinds(&self) -> Vec<EntityKind> {
        let loaders = self.loaders.read().await;
        let mut kinds: Vec<EntityKind> = loaders.keys().cloned().collect();
        kinds.sort();
        kinds
    }
}
