//! # YAML Storage Module
//!
//! File-based storage for the concierge backend. The only state that
//! survives a restart is the auth store: a single `auth.yaml` under the data
//! directory holding the seeded manager credential table and the cached
//! session role. Writes are atomic (temp file, then rename).

pub mod auth_repository;
pub mod connection;

pub use auth_repository::AuthRepository;
pub use connection::YamlConnection;
