//! # Storage Traits
//!
//! Abstractions over the persistence backend, so the domain layer works
//! against an interface rather than a concrete file format.

use anyhow::Result;
use shared::UserRole;

/// Interface for the auth store: the manager credential table and the cached
/// session role.
pub trait AuthStorage: Send + Sync {
    /// Look up the stored password for a manager email.
    fn get_manager_password(&self, email: &str) -> Result<Option<String>>;

    /// Cache the signed-in role for session restore.
    fn save_role(&self, role: UserRole) -> Result<()>;

    /// Read the cached role, if a session was saved.
    fn get_saved_role(&self) -> Result<Option<UserRole>>;

    /// Drop the cached role on logout.
    fn clear_saved_role(&self) -> Result<()>;
}
