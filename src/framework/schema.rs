// Schema Fragments - declarative field definitions composed into model schemas
// Mixins expose reusable field fragments; concrete models concatenate them

use serde::{Deserialize, Serialize};

use crate::core::EntityKind;

/// Schema definition trait implemented by each concrete model
pub trait ModelSchema: Send + Sync {
    /// Entity kind this schema defines
    fn kind() -> EntityKind
    where
        Self: Sized;

    /// Define fields for this model, including any mixin fragments
    fn fields() -> Vec<FieldDefinition>
    where
        Self: Sized;
}

/// A single field of a model schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub optional: bool,
    pub immutable: bool,
    /// Computed fields are derived on read and never persisted
    pub computed: bool,
    pub validators: Vec<FieldValidator>,
}

impl FieldDefinition {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            optional: false,
            immutable: false,
            computed: false,
            validators: Vec::new(),
        }
    }

    /// Mark field as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark field as immutable (can't be updated after creation)
    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }

    /// Mark field as computed on read rather than persisted
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Add field validator
    pub fn validate(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }
}

/// Field types supported by the model layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldType {
    /// Short text, single line
    String,
    /// Long free-form text
    Text,
    /// UTC date and time
    Time,
    /// Entity kind discriminator of a typed reference
    Kind,
    /// Resolved half of a typed reference
    Reference,
}

/// Field validators enforced at write time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FieldValidator {
    MaxLength(usize),
    /// Value must be one of the listed entity kind names
    OneOf(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder_flags() {
        let field = FieldDefinition::new("created", FieldType::Time)
            .optional()
            .immutable();
        assert_eq!(field.name, "created");
        assert!(field.optional);
        assert!(field.immutable);
        assert!(!field.computed);
    }

    #[test]
    fn test_field_validators_accumulate() {
        let field = FieldDefinition::new("title", FieldType::String)
            .validate(FieldValidator::MaxLength(200));
        assert_eq!(field.validators.len(), 1);
    }
}
