//! Identity collaborator: who is signed in, and signing in and out.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::error::AuthError;
use crate::validation::{validate_email, validate_password};

/// Source of the current user's identity.
pub trait AuthProvider: Send + Sync {
    /// Identity string (email) of the signed-in user, if any.
    fn current_user(&self) -> Option<String>;

    /// Sign the current user out.
    fn sign_out(&self) -> Result<(), AuthError>;
}

/// In-process account registry.
#[derive(Default)]
pub struct LocalAuth {
    accounts: RwLock<HashMap<String, String>>,
    current: RwLock<Option<String>>,
}

impl LocalAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account and sign it in.
    pub fn register(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = email.trim();
        validate_email(email).map_err(AuthError::InvalidEmail)?;
        validate_password(password).map_err(AuthError::WeakPassword)?;

        {
            let mut accounts = self.accounts.write();
            if accounts.contains_key(email) {
                return Err(AuthError::EmailInUse(email.to_string()));
            }
            accounts.insert(email.to_string(), password.to_string());
        }

        *self.current.write() = Some(email.to_string());
        tracing::info!(user = %email, "registered");
        Ok(())
    }

    /// Sign in an existing account.
    pub fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = email.trim();
        validate_email(email).map_err(AuthError::InvalidEmail)?;

        let matches = self
            .accounts
            .read()
            .get(email)
            .is_some_and(|stored| stored == password);
        if !matches {
            return Err(AuthError::WrongCredentials);
        }

        *self.current.write() = Some(email.to_string());
        tracing::info!(user = %email, "signed in");
        Ok(())
    }
}

impl AuthProvider for LocalAuth {
    fn current_user(&self) -> Option<String> {
        self.current.read().clone()
    }

    fn sign_out(&self) -> Result<(), AuthError> {
        if let Some(user) = self.current.write().take() {
            tracing::info!(user = %user, "signed out");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_signs_in() {
        let auth = LocalAuth::new();
        assert_eq!(auth.current_user(), None);
        auth.register("a@x.com", "secret1").unwrap();
        assert_eq!(auth.current_user().as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_register_rejects_bad_input() {
        let auth = LocalAuth::new();
        assert!(matches!(
            auth.register("not-an-email", "secret1"),
            Err(AuthError::InvalidEmail(_))
        ));
        assert!(matches!(
            auth.register("a@x.com", "123"),
            Err(AuthError::WeakPassword(_))
        ));
        assert_eq!(auth.current_user(), None);
    }

    #[test]
    fn test_register_duplicate_email() {
        let auth = LocalAuth::new();
        auth.register("a@x.com", "secret1").unwrap();
        assert_eq!(
            auth.register("a@x.com", "secret2"),
            Err(AuthError::EmailInUse("a@x.com".into()))
        );
    }

    #[test]
    fn test_sign_in_checks_password() {
        let auth = LocalAuth::new();
        auth.register("a@x.com", "secret1").unwrap();
        auth.sign_out().unwrap();

        assert_eq!(auth.sign_in("a@x.com", "wrong!!"), Err(AuthError::WrongCredentials));
        assert_eq!(auth.current_user(), None);
        assert_eq!(auth.sign_in("b@x.com", "secret1"), Err(AuthError::WrongCredentials));

        auth.sign_in(" a@x.com ", "secret1").unwrap();
        assert_eq!(auth.current_user().as_deref(), Some("a@x.com"));
    }

    #[test]
    fn test_sign_out_is_idempotent() {
        let auth = LocalAuth::new();
        auth.register("a@x.com", "secret1").unwrap();
        assert!(auth.sign_out().is_ok());
        assert!(auth.sign_out().is_ok());
        assert_eq!(auth.current_user(), None);
    }
}
