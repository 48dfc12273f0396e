//! In-memory adapters for tests and ephemeral runs.

mod profile_store;

pub use profile_store::InMemoryProfileStore;
