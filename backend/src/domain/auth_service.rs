//! Authentication for guests and hotel managers.
//!
//! Guests sign in with one tap; managers authenticate against the seeded
//! credential table in the auth store. The signed-in role is cached to disk
//! so a session survives a restart, and mirrored in memory for the current
//! process.

use anyhow::Result;
use log::{info, warn};
use shared::UserRole;
use std::sync::{Arc, Mutex};

use crate::domain::commands::auth::{LoginCommand, LoginResult, LogoutResult, SavedRoleResult};
use crate::domain::error::DomainError;
use crate::storage::traits::AuthStorage;
use crate::storage::yaml::{AuthRepository, YamlConnection};

#[derive(Clone)]
pub struct AuthService {
    auth_repository: AuthRepository,
    /// Role of the current session, None when signed out
    current_role: Arc<Mutex<Option<UserRole>>>,
}

impl AuthService {
    pub fn new(connection: Arc<YamlConnection>) -> Self {
        Self {
            auth_repository: AuthRepository::new(connection),
            current_role: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign in without credentials. Guests always succeed.
    pub fn login_as_guest(&self) -> Result<LoginResult> {
        info!("Guest login");

        self.set_current_role(Some(UserRole::Guest));
        self.auth_repository.save_role(UserRole::Guest)?;

        Ok(LoginResult {
            role: UserRole::Guest,
        })
    }

    /// Sign in as a manager against the stored credential table.
    pub fn login_as_manager(&self, command: LoginCommand) -> Result<LoginResult> {
        info!("Manager login attempt: {}", command.email);

        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(DomainError::Validation("Please fill all fields".to_string()).into());
        }

        let stored_password = self.auth_repository.get_manager_password(&command.email)?;

        match stored_password {
            Some(password) if password == command.password => {
                self.set_current_role(Some(UserRole::Manager));
                self.auth_repository.save_role(UserRole::Manager)?;

                info!("Manager login succeeded: {}", command.email);
                Ok(LoginResult {
                    role: UserRole::Manager,
                })
            }
            _ => {
                warn!("Manager login failed: {}", command.email);
                self.set_current_role(None);
                Err(DomainError::InvalidCredentials.into())
            }
        }
    }

    /// Sign out and forget the cached session role.
    pub fn logout(&self) -> Result<LogoutResult> {
        info!("Logout");

        self.set_current_role(None);
        self.auth_repository.clear_saved_role()?;

        Ok(LogoutResult {
            success_message: "Signed out".to_string(),
        })
    }

    /// Restore a previous session from the cached role, if one exists.
    pub fn load_saved_role(&self) -> Result<SavedRoleResult> {
        let role = self.auth_repository.get_saved_role()?;

        if let Some(role) = role {
            info!("Restored saved session role: {}", role.as_str());
            self.set_current_role(Some(role));
        }

        Ok(SavedRoleResult { role })
    }

    /// Role of the current in-process session.
    pub fn current_role(&self) -> Option<UserRole> {
        *self.current_role.lock().unwrap()
    }

    fn set_current_role(&self, role: Option<UserRole>) {
        let mut current = self.current_role.lock().unwrap();
        *current = role;
    }
}
