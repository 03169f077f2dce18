// Simple schemas for the account records the Like owner restriction names

use crate::core::EntityKind;
use crate::entities::group::GROUP_NAME_MAX_LEN;
use crate::entities::user::USERNAME_MAX_LEN;
use crate::framework::schema::{FieldDefinition, FieldType, FieldValidator, ModelSchema};

pub struct UserSchema;

impl ModelSchema for UserSchema {
    fn kind() -> EntityKind {
        EntityKind::new_unchecked("user")
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![FieldDefinition::new("username", FieldType::String)
            .validate(FieldValidator::MaxLength(USERNAME_MAX_LEN))]
    }
}

pub struct GroupSchema;

impl ModelSchema for GroupSchema {
    fn kind() -> EntityKind {
        EntityKind::new_unchecked("group")
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![FieldDefinition::new("name", FieldType::String)
            .validate(FieldValidator::MaxLength(GROUP_NAME_MAX_LEN))]
    }
}
