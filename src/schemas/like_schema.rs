// Like Schema - two typed-reference fragments on one model

use crate::core::EntityKind;
use crate::entities::like::{FavoriteObjectSlot, OwnerSlot};
use crate::framework::relation::RefSlot;
use crate::framework::schema::{FieldDefinition, ModelSchema};

pub struct LikeSchema;

impl ModelSchema for LikeSchema {
    fn kind() -> EntityKind {
        EntityKind::new_unchecked("like")
    }

    fn fields() -> Vec<FieldDefinition> {
        let mut fields = FavoriteObjectSlot::spec().fields();
        fields.extend(OwnerSlot::spec().fields());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::schema::FieldValidator;

    #[test]
    fn test_both_fragments_have_distinct_names() {
        let mut names: Vec<String> = LikeSchema::fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names.len(), 6);
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_owner_discriminator_is_restricted() {
        let fields = LikeSchema::fields();
        let owner_discriminator = fields
            .iter()
            .find(|f| f.name == "owner_type_discriminator")
            .unwrap();
        assert!(owner_discriminator.validators.iter().any(|v| matches!(
            v,
            FieldValidator::OneOf(kinds) if kinds == &["user".to_string(), "group".to_string()]
        )));
    }

    #[test]
    fn test_resolved_fields_are_computed() {
        let computed: Vec<String> = LikeSchema::fields()
            .into_iter()
            .filter(|f| f.computed)
            .map(|f| f.name)
            .collect();
        assert_eq!(computed, vec!["resolved_object", "owner_resolved_object"]);
    }
}
