// Idea Schema - declarative field definitions for the Idea model

use crate::core::EntityKind;
use crate::entities::idea::TITLE_MAX_LEN;
use crate::framework::schema::{FieldDefinition, FieldType, FieldValidator, ModelSchema};
use crate::framework::timestamps::Timestamps;

pub struct IdeaSchema;

impl ModelSchema for IdeaSchema {
    fn kind() -> EntityKind {
        EntityKind::new_unchecked("idea")
    }

    fn fields() -> Vec<FieldDefinition> {
        let mut fields = vec![
            FieldDefinition::new("title", FieldType::String)
                .validate(FieldValidator::MaxLength(TITLE_MAX_LEN)),
            FieldDefinition::new("content", FieldType::Text),
        ];
        fields.extend(Timestamps::fields());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_schema_includes_timestamp_fragment() {
        let names: Vec<String> = IdeaSchema::fields().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["title", "content", "created", "modified"]);
    }
}
