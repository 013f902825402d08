//! In-memory adapters.
//!
//! - `store` - `InMemoryRegistry`, implementing `UserStore` and `LectureStore`
//! - `seed` - YAML seed loading for the registry

mod seed;
mod store;

pub use seed::{load_registry, SeedData, SeedError, SeedLecture, SeedRegistration, SeedUser};
pub use store::InMemoryRegistry;
