//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, errors)
//! - `profile` - Professional profiles, validation, search and aggregates

pub mod foundation;
pub mod profile;
