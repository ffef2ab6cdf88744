use thiserror::Error;
use uuid::Uuid;

use crate::contract::model::FieldError;

/// Errors that are safe to expose to callers. Display strings are the
/// user-facing (Spanish) messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersDirectoryError {
    #[error("Usuario no encontrado")]
    NotFound { id: Uuid },

    #[error("El RUT ya está registrado")]
    RutConflict { rut: String },

    #[error("No se puede eliminar un usuario que está de cumpleaños hoy")]
    BirthdayRestriction { id: Uuid },

    #[error("{}", join_messages(.errors))]
    Validation { errors: Vec<FieldError> },

    #[error("Error interno")]
    Internal,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl UsersDirectoryError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn rut_conflict(rut: impl Into<String>) -> Self {
        Self::RutConflict { rut: rut.into() }
    }

    pub fn birthday_restriction(id: Uuid) -> Self {
        Self::BirthdayRestriction { id }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UsersDirectoryError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            UserNotFound { id } => Self::not_found(id),
            RutAlreadyExists { rut } => Self::rut_conflict(rut),
            BirthdayRestriction { id } => Self::birthday_restriction(id),
            Validation { errors } => Self::validation(errors),
            Storage { .. } => Self::internal(),
        }
    }
}
