//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Profile Store Ports
//!
//! - `ProfileRepository` - Writes (create, update, delete)
//! - `ProfileReader` - Reads (by id, pages, full scan)

mod profile_reader;
mod profile_repository;

pub use profile_reader::ProfileReader;
pub use profile_repository::ProfileRepository;
