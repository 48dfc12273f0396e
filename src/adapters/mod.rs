//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `sqlite` - Profile store backed by an embedded SQLite database
//! - `memory` - Profile store kept in process memory
//! - `http` - REST API (axum)
//! - `fixture` - JSON fixture files used to seed the store

pub mod fixture;
pub mod http;
pub mod memory;
pub mod sqlite;

pub use memory::InMemoryProfileStore;
pub use sqlite::{SqliteProfileReader, SqliteProfileRepository};
