// Model Framework - schema fragments, mixins and the entity trait

pub mod entity;
pub mod meta_tags;
pub mod relation;
pub mod schema;
pub mod timestamps;
pub mod url;

// Re-export framework types for convenience
pub use entity::Entity;
pub use meta_tags::MetaTags;
pub use relation::{KindRestriction, RefSlot, RelationSpec, TypedRef};
pub use schema::{FieldDefinition, FieldType, FieldValidator, ModelSchema};
pub use timestamps::Timestamps;
pub use url::{CanonicalUrl, UrlSource};
