//! # YAML Auth Repository
//!
//! File-based storage for the manager credential table and the cached
//! session role, in a single `auth.yaml` at the root of the data directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! manager_credentials:
//!   admin@hotel.com: admin123
//!   manager@hotel.com: manager123
//! saved_role: "manager"
//! created_at: "2026-01-21T19:30:00Z"
//! updated_at: "2026-01-21T19:35:00Z"
//! ```
//!
//! The credential table is seeded on first load. Passwords are plaintext,
//! matching the source product; hardening is out of scope.

use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use shared::UserRole;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use super::connection::YamlConnection;
use crate::storage::traits::AuthStorage;

/// On-disk auth store structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AuthConfig {
    /// Manager email -> password table
    manager_credentials: BTreeMap<String, String>,
    /// Cached session role ("guest" / "manager"), None when signed out
    saved_role: Option<String>,
    created_at: String,
    updated_at: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let mut manager_credentials = BTreeMap::new();
        manager_credentials.insert("admin@hotel.com".to_string(), "admin123".to_string());
        manager_credentials.insert("manager@hotel.com".to_string(), "manager123".to_string());

        let now = Utc::now().to_rfc3339();
        Self {
            manager_credentials,
            saved_role: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// YAML-backed auth repository.
#[derive(Clone)]
pub struct AuthRepository {
    connection: Arc<YamlConnection>,
}

impl AuthRepository {
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self { connection }
    }

    fn auth_config_path(&self) -> PathBuf {
        self.connection.base_directory().join("auth.yaml")
    }

    /// Load the auth config, seeding the default credential table on first
    /// run.
    fn load_or_create(&self) -> Result<AuthConfig> {
        let config_path = self.auth_config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: AuthConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Malformed auth store at {}", config_path.display()))?;
            debug!("Loaded auth config from {}", config_path.display());
            Ok(config)
        } else {
            let config = AuthConfig::default();
            self.save(&config)?;
            info!("Seeded default auth config at {}", config_path.display());
            Ok(config)
        }
    }

    fn save(&self, config: &AuthConfig) -> Result<()> {
        let config_path = self.auth_config_path();
        let base_dir = self.connection.base_directory();

        if !base_dir.exists() {
            fs::create_dir_all(&base_dir)?;
        }

        let yaml_content = serde_yaml::to_string(config)?;

        // Atomic write: temp file, then rename
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved auth config to {}", config_path.display());
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut AuthConfig),
    {
        let mut config = self.load_or_create()?;
        mutate(&mut config);
        config.updated_at = Utc::now().to_rfc3339();
        self.save(&config)
    }
}

impl AuthStorage for AuthRepository {
    fn get_manager_password(&self, email: &str) -> Result<Option<String>> {
        let config = self.load_or_create()?;
        Ok(config.manager_credentials.get(email).cloned())
    }

    fn save_role(&self, role: UserRole) -> Result<()> {
        self.update(|config| {
            config.saved_role = Some(role.as_str().to_string());
        })?;
        info!("Cached session role: {}", role.as_str());
        Ok(())
    }

    fn get_saved_role(&self) -> Result<Option<UserRole>> {
        let config = self.load_or_create()?;
        Ok(config.saved_role.as_deref().and_then(UserRole::parse))
    }

    fn clear_saved_role(&self) -> Result<()> {
        self.update(|config| {
            config.saved_role = None;
        })?;
        info!("Cleared cached session role");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_test() -> (tempfile::TempDir, AuthRepository) {
        let temp_dir = tempdir().unwrap();
        let conn = YamlConnection::new(temp_dir.path()).unwrap();
        let repo = AuthRepository::new(Arc::new(conn));
        (temp_dir, repo)
    }

    #[test]
    fn test_seeds_default_credentials() {
        let (_dir, repo) = setup_test();

        assert_eq!(
            repo.get_manager_password("admin@hotel.com").unwrap(),
            Some("admin123".to_string())
        );
        assert_eq!(
            repo.get_manager_password("manager@hotel.com").unwrap(),
            Some("manager123".to_string())
        );
        assert_eq!(repo.get_manager_password("nobody@hotel.com").unwrap(), None);
    }

    #[test]
    fn test_save_and_get_role() {
        let (_dir, repo) = setup_test();

        assert_eq!(repo.get_saved_role().unwrap(), None);

        repo.save_role(UserRole::Manager).unwrap();
        assert_eq!(repo.get_saved_role().unwrap(), Some(UserRole::Manager));

        repo.save_role(UserRole::Guest).unwrap();
        assert_eq!(repo.get_saved_role().unwrap(), Some(UserRole::Guest));
    }

    #[test]
    fn test_clear_saved_role() {
        let (_dir, repo) = setup_test();

        repo.save_role(UserRole::Guest).unwrap();
        repo.clear_saved_role().unwrap();
        assert_eq!(repo.get_saved_role().unwrap(), None);
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = tempdir().unwrap();

        {
            let conn = YamlConnection::new(temp_dir.path()).unwrap();
            let repo = AuthRepository::new(Arc::new(conn));
            repo.save_role(UserRole::Manager).unwrap();
        }

        let conn = YamlConnection::new(temp_dir.path()).unwrap();
        let repo = AuthRepository::new(Arc::new(conn));
        assert_eq!(repo.get_saved_role().unwrap(), Some(UserRole::Manager));
    }

    #[test]
    fn test_seeded_credentials_survive_role_updates() {
        let (_dir, repo) = setup_test();

        repo.save_role(UserRole::Manager).unwrap();
        repo.clear_saved_role().unwrap();

        assert_eq!(
            repo.get_manager_password("admin@hotel.com").unwrap(),
            Some("admin123".to_string())
        );
    }
}
