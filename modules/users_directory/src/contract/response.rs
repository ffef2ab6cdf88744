use serde::{Deserialize, Serialize};

use crate::contract::error::UsersDirectoryError;
use crate::contract::model::FieldError;

/// Directory operations, used to pick the generic failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListAll,
    GetById,
    Create,
    Update,
    Delete,
    Count,
}

impl Operation {
    /// Message reported when the operation fails for an internal reason.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListAll => "Error al obtener usuarios",
            Operation::GetById => "Error al obtener usuario",
            Operation::Create => "Error al crear usuario",
            Operation::Update => "Error al actualizar usuario",
            Operation::Delete => "Error al eliminar usuario",
            Operation::Count => "Error al obtener conteo de usuarios",
        }
    }
}

/// Uniform result envelope returned by every directory operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            errors: Vec::new(),
        }
    }

    /// Success without a payload.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            errors: Vec::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    /// Failure envelope for `error` raised while running `op`.
    ///
    /// Internal errors are reported with the operation's generic message;
    /// everything else with its own message.
    pub fn from_error(op: Operation, error: UsersDirectoryError) -> Self {
        match error {
            UsersDirectoryError::Internal => Self::fail(op.failure_message()),
            UsersDirectoryError::Validation { ref errors } => Self {
                errors: errors.clone(),
                ..Self::fail(error.to_string())
            },
            other => Self::fail(other.to_string()),
        }
    }

    pub fn from_result(op: Operation, result: Result<T, UsersDirectoryError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::from_error(op, e),
        }
    }

    pub fn into_result(self) -> Result<Option<T>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self.message.unwrap_or_default())
        }
    }
}

impl ApiResponse<()> {
    /// Payload-less envelope; `()` is never placed in `data`.
    pub fn from_unit(op: Operation, result: Result<(), UsersDirectoryError>) -> Self {
        match result {
            Ok(()) => Self::ok_empty(),
            Err(e) => Self::from_error(op, e),
        }
    }
}
