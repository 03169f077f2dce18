// Concrete models built from the framework mixins

pub mod group;
pub mod idea;
pub mod like;
pub mod user;

// Re-export the model structs
pub use group::Group;
pub use idea::Idea;
pub use like::{FavoriteObjectSlot, Like, OwnerSlot};
pub use user::User;
