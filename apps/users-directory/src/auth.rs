//! Demo login: any non-blank username with the configured fixed password.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Credenciales inválidas")]
    InvalidCredentials,
}

/// The logged-in user of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub username: String,
}

#[derive(Debug, Clone)]
pub struct DemoAuthenticator {
    password: String,
}

impl DemoAuthenticator {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    pub fn login(&self, username: &str, password: &str) -> Result<AuthUser, AuthError> {
        let username = username.trim();
        if username.is_empty() || password != self.password {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(AuthUser {
            username: username.to_string(),
        })
    }
}
