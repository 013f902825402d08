//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Store Ports
//!
//! - `UserStore` - Lookup and upsert of users by login or email
//! - `LectureStore` - Lookup and upsert of lectures by `(path, lecture)` key

mod lecture_store;
mod user_store;

pub use lecture_store::LectureStore;
pub use user_store::UserStore;
