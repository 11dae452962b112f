use crate::core::{User, UserRepository};
use crate::utils::error::{BookstoreError, Result};

/// Validates and appends new users to the registry.
pub struct RegistrationService<U: UserRepository> {
    users: U,
}

impl<U: UserRepository> RegistrationService<U> {
    pub fn new(users: U) -> Self {
        Self { users }
    }

    /// Presence check only, matching upstream: no trimming, no case folding.
    /// The duplicate check and the append run inside the repository's
    /// critical section so concurrent registrations cannot both win.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(BookstoreError::invalid_input(
                "Username and password required",
            ));
        }

        let user = User {
            username: username.to_string(),
            password: password.to_string(),
        };

        if !self.users.add_unique(user).await {
            return Err(BookstoreError::conflict("User already exists"));
        }

        tracing::debug!("registered user {}", username);
        Ok(())
    }
}
