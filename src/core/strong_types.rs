// Strong Types - newtype wrappers for identifiers used across the model layer
// Replaces primitive type aliases with proper newtype patterns for compile-time safety

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque string identifier for a persisted record within its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(String);

impl ObjectId {
    /// Create an object identifier from an existing string value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier for a newly persisted record
    pub fn random() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is non-empty
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<ObjectId> for String {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

/// Strongly-typed entity kind - the type discriminator of a polymorphic reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityKind(String);

impl EntityKind {
    /// Create a new entity kind with validation
    pub fn new(name: &str) -> Result<Self, &'static str> {
        if name.is_empty() {
            return Err("Entity kind cannot be empty");
        }
        if !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
            return Err("Entity kind must be lowercase with underscores only");
        }
        Ok(Self(name.to_string()))
    }

    /// Create an entity kind without validation (for internal use)
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntityKind {
    fn from(s: &str) -> Self {
        Self::new_unchecked(s)
    }
}

impl From<String> for EntityKind {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<EntityKind> for String {
    fn from(kind: EntityKind) -> Self {
        kind.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_id_operations() {
        let id = ObjectId::new("123");
        assert_eq!(id.as_str(), "123");
        assert!(id.is_valid());

        let empty = ObjectId::new("");
        assert!(!empty.is_valid());
    }

    #[test]
    fn test_object_id_random_is_unique() {
        let a = ObjectId::random();
        let b = ObjectId::random();
        assert_ne!(a, b);
        assert!(a.is_valid());
    }

    #[test]
    fn test_entity_kind_validation() {
        assert!(EntityKind::new("idea").is_ok());
        assert!(EntityKind::new("auth_group").is_ok());
        assert!(EntityKind::new("").is_err());
        assert!(EntityKind::new("INVALID").is_err());
    }

    #[test]
    fn test_entity_kind_formatting() {
        let kind = EntityKind::new_unchecked("user");
        assert_eq!(kind.to_string(), "user");
        assert_eq!(kind.as_str(), "user");
    }
}
