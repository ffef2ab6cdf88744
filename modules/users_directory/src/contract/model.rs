use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored user record.
///
/// `id`, `rut` and the timestamps are owned by the directory; callers only
/// influence the remaining fields through [`NewUser`] and [`UserUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub rut: String,
    pub full_name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub child_count: u32,
    pub email: String,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub rut: String,
    pub full_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub child_count: u32,
    pub email: String,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
}

/// Replacement values for the mutable fields of a user.
///
/// Carries no `rut`: a RUT is fixed at creation. A `rut` key in incoming JSON
/// is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub full_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub child_count: u32,
    pub email: String,
    pub phones: Vec<String>,
    pub addresses: Vec<String>,
}

impl From<&User> for UserUpdate {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            birth_date: user.birth_date.clone(),
            child_count: user.child_count,
            email: user.email.clone(),
            phones: user.phones.clone(),
            addresses: user.addresses.clone(),
        }
    }
}

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
