//! Storage layer: file-backed persistence for the auth role cache and
//! manager credential table.

pub mod traits;
pub mod yaml;

pub use traits::AuthStorage;
pub use yaml::{AuthRepository, YamlConnection};
