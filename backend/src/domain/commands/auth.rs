use shared::UserRole;

/// Manager sign-in with credentials from the login form.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct LogoutResult {
    pub success_message: String,
}

/// Result of restoring a cached session role at startup.
#[derive(Debug, Clone)]
pub struct SavedRoleResult {
    pub role: Option<UserRole>,
}
