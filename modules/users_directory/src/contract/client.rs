use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    model::{NewUser, User, UserUpdate},
    response::ApiResponse,
};

/// Public API of the users directory.
///
/// Every operation settles into an [`ApiResponse`]; implementations never
/// surface raw errors to the caller.
#[async_trait]
pub trait UsersDirectoryApi: Send + Sync {
    /// All users in insertion order.
    async fn list_all(&self) -> ApiResponse<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> ApiResponse<User>;

    /// Register a new user; the RUT must not be taken.
    async fn create(&self, new_user: NewUser) -> ApiResponse<User>;

    /// Replace the mutable fields of a user. The RUT never changes.
    async fn update(&self, id: Uuid, update: UserUpdate) -> ApiResponse<User>;

    /// Remove a user, unless today is their birthday.
    async fn delete(&self, id: Uuid) -> ApiResponse<()>;

    /// Number of stored users.
    async fn count(&self) -> ApiResponse<usize>;
}
