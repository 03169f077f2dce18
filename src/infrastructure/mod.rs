// Persistence infrastructure - record store and reference resolution

pub mod kind_registry;
pub mod store;

// Re-export commonly used types
pub use kind_registry::{KindRegistry, ObjectLoader, ResolvedObject};
pub use store::{ObjectStore, StoredObject};
