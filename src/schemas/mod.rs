// Schema Definitions - declarative model schemas composed from mixin fragments

pub mod idea_schema;
pub mod like_schema;
pub mod simple_schemas;

pub use idea_schema::IdeaSchema;
pub use like_schema::LikeSchema;
pub use simple_schemas::{GroupSchema, UserSchema};
