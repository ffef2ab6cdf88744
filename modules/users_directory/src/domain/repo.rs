use crate::contract::model::User;
use async_trait::async_trait;
use uuid::Uuid;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// All users, in insertion order.
    async fn list_all(&self) -> anyhow::Result<Vec<User>>;
    /// Load a user by id.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Whether a user with an equivalent RUT exists (punctuation and case ignored).
    async fn rut_exists(&self, rut: &str) -> anyhow::Result<bool>;
    /// Insert a fully-formed domain user.
    ///
    /// Service computes id/timestamps/validation; repo persists. Fails if the
    /// id or an equivalent RUT is already stored.
    async fn insert(&self, u: User) -> anyhow::Result<()>;
    /// Replace an existing user (by `u.id`). Returns false if no such user is stored.
    async fn update(&self, u: User) -> anyhow::Result<bool>;
    /// Delete by id. Returns true if a user was removed.
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;
    /// Number of stored users.
    async fn count(&self) -> anyhow::Result<usize>;
}
