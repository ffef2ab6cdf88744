//! In-memory repository implementation for the domain port.
//!
//! Users live in a `Vec` guarded by a `parking_lot::RwLock`, so listing keeps
//! insertion order. The lock is never held across an `.await`.

use anyhow::bail;
use parking_lot::RwLock;
use uuid::Uuid;
use validation::normalize_rut;

use crate::contract::User;
use crate::domain::repo::UsersRepository;

/// In-memory repository impl. Each instance is an independent directory.
#[derive(Debug, Default)]
pub struct InMemoryUsersRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUsersRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of users, kept in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait::async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn list_all(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.users.read().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn rut_exists(&self, rut: &str) -> anyhow::Result<bool> {
        let key = normalize_rut(rut);
        Ok(self
            .users
            .read()
            .iter()
            .any(|u| normalize_rut(&u.rut) == key))
    }

    async fn insert(&self, u: User) -> anyhow::Result<()> {
        let key = normalize_rut(&u.rut);
        let mut users = self.users.write();
        if users.iter().any(|existing| existing.id == u.id) {
            bail!("insert failed: id {} already stored", u.id);
        }
        if users.iter().any(|existing| normalize_rut(&existing.rut) == key) {
            bail!("insert failed: RUT {} already stored", u.rut);
        }
        users.push(u);
        Ok(())
    }

    async fn update(&self, u: User) -> anyhow::Result<bool> {
        let mut users = self.users.write();
        match users.iter_mut().find(|existing| existing.id == u.id) {
            Some(slot) => {
                *slot = u;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut users = self.users.write();
        match users.iter().position(|u| u.id == id) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.users.read().len())
    }
}
