use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::FieldError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: Uuid },

    #[error("User with RUT '{rut}' already exists")]
    RutAlreadyExists { rut: String },

    #[error("User {id} cannot be deleted on their birthday")]
    BirthdayRestriction { id: Uuid },

    #[error("Validation failed on {} field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn user_not_found(id: Uuid) -> Self {
        Self::UserNotFound { id }
    }

    pub fn rut_already_exists(rut: impl Into<String>) -> Self {
        Self::RutAlreadyExists { rut: rut.into() }
    }

    pub fn birthday_restriction(id: Uuid) -> Self {
        Self::BirthdayRestriction { id }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for DomainError {
    fn from(e: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        Self::storage(format!("{e:#}"))
    }
}
