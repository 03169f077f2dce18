// Like - "owner likes object", two typed-reference slots on one record

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::ObjectId;
use crate::error::{AppError, AppResult};
use crate::framework::entity::Entity;
use crate::framework::relation::{RefSlot, RelationSpec, TypedRef};
use crate::infrastructure::kind_registry::KindRegistry;
use crate::infrastructure::store::ObjectStore;

/// The favorited object: any kind, unprefixed field names
pub struct FavoriteObjectSlot;

impl RefSlot for FavoriteObjectSlot {
    fn spec() -> &'static RelationSpec {
        static SPEC: Lazy<RelationSpec> = Lazy::new(|| {
            RelationSpec::builder()
                .required()
                .build()
                .expect("favorite object slot is misconfigured")
        });
        &SPEC
    }
}

/// The owner doing the liking: restricted to user or group records
pub struct OwnerSlot;

impl RefSlot for OwnerSlot {
    fn spec() -> &'static RelationSpec {
        static SPEC: Lazy<RelationSpec> = Lazy::new(|| {
            RelationSpec::builder()
                .prefix("owner")
                .verbose_name("Owner")
                .related_name()
                .restrict_to(["user", "group"])
                .required()
                .build()
                .expect("owner slot is misconfigured")
        });
        &SPEC
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id: Option<ObjectId>,
    #[serde(flatten)]
    pub object: TypedRef<FavoriteObjectSlot>,
    #[serde(flatten)]
    pub owner: TypedRef<OwnerSlot>,
}

impl Like {
    pub fn new(owner: TypedRef<OwnerSlot>, object: TypedRef<FavoriteObjectSlot>) -> Self {
        Self {
            id: None,
            object,
            owner,
        }
    }

    /// Render "{owner} likes {object}" from the two resolved references
    pub async fn describe(
        &self,
        registry: &KindRegistry,
        store: &ObjectStore,
    ) -> AppResult<String> {
        let owner = self
            .owner
            .resolve(registry, store)
            .await?
            .ok_or_else(|| AppError::NotFound("like owner could not be resolved".to_string()))?;
        let object = self
            .object
            .resolve(registry, store)
            .await?
            .ok_or_else(|| AppError::NotFound("liked object could not be resolved".to_string()))?;

        Ok(format!(
            "{} likes {}",
            owner.display_label(),
            object.display_label()
        ))
    }
}

impl Entity for Like {
    const KIND: &'static str = "like";

    fn object_id(&self) -> Option<&ObjectId> {
        self.id.as_ref()
    }

    fn set_object_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn validate(&self) -> AppResult<Vec<String>> {
        let mut problems = self.object.validate();
        problems.extend(self.owner.validate());
        Ok(problems)
    }

    fn display_label(&self) -> String {
        // Raw reference pairs; the resolved form comes from describe()
        match (
            (&self.owner.kind, &self.owner.object_id),
            (&self.object.kind, &self.object.object_id),
        ) {
            ((Some(ok), Some(oi)), (Some(tk), Some(ti))) => {
                format!("{}:{} likes {}:{}", ok, oi, tk, ti)
            }
            _ => "like".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_outside_restriction_fails_validation() {
        let like = Like::new(
            TypedRef::to("idea", "3"),
            TypedRef::to("idea", "3"),
        );
        let problems = like.validate().unwrap();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("owner_type_discriminator"));
    }

    #[test]
    fn test_unset_slots_fail_validation() {
        let like = Like::new(TypedRef::unset(), TypedRef::unset());
        let problems = like.validate().unwrap();
        assert_eq!(problems.len(), 4);
    }

    #[test]
    fn test_serialized_record_keeps_prefixed_names() {
        let like = Like::new(
            TypedRef::to("user", "17"),
            TypedRef::to("idea", "3"),
        );
        let value = serde_json::to_value(&like).unwrap();
        assert_eq!(value["type_discriminator"], "idea");
        assert_eq!(value["object_identifier"], "3");
        assert_eq!(value["owner_type_discriminator"], "user");
        assert_eq!(value["owner_object_identifier"], "17");

        let back: Like = serde_json::from_value(value).unwrap();
        assert_eq!(back, like);
    }

    #[test]
    fn test_display_label_shows_raw_pairs() {
        let like = Like::new(
            TypedRef::to("user", "17"),
            TypedRef::to("idea", "3"),
        );
        assert_eq!(like.display_label(), "user:17 likes idea:3");
    }
}
