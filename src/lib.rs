//! FuturoConecta - Professional profile directory
//!
//! This crate stores professional profiles and answers search, filter and
//! aggregate queries over them through a REST API.
//!
//! Layout follows hexagonal architecture: `domain` holds the profile model
//! and the pure query engine, `ports` the store contracts, `application` one
//! handler per operation, and `adapters` the SQLite, in-memory and HTTP
//! implementations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
