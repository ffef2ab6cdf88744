use std::sync::Arc;
use std::time::Duration;

use crate::contract::model::{NewUser, User, UserUpdate};
use crate::domain::error::DomainError;
use crate::domain::events::UserDomainEvent;
use crate::domain::form;
use crate::domain::ports::{Clock, EventPublisher};
use crate::domain::repo::UsersRepository;
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validation::is_birthday_today;

/// Domain service with business rules for the users directory.
/// Depends only on ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    events: Arc<dyn EventPublisher<UserDomainEvent>>,
    clock: Arc<dyn Clock>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Simulated latency before every operation except `count`.
    pub latency: Duration,
    /// Simulated latency before `count`.
    pub count_latency: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            count_latency: Duration::from_millis(200),
        }
    }
}

impl ServiceConfig {
    /// No simulated latency at all.
    pub fn immediate() -> Self {
        Self {
            latency: Duration::ZERO,
            count_latency: Duration::ZERO,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        events: Arc<dyn EventPublisher<UserDomainEvent>>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            events,
            clock,
            config,
        }
    }

    async fn simulate_latency(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    #[instrument(name = "users_directory.service.list_users", skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        Self::simulate_latency(self.config.latency).await;
        debug!("Listing users");

        let users = self.repo.list_all().await?;
        debug!("Successfully listed {} users", users.len());
        Ok(users)
    }

    #[instrument(name = "users_directory.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: Uuid) -> Result<User, DomainError> {
        Self::simulate_latency(self.config.latency).await;
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.create_user",
        skip(self, new_user),
        fields(rut = %new_user.rut)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        Self::simulate_latency(self.config.latency).await;
        info!("Creating new user");

        let new_user = form::sanitize_new_user(new_user);
        let errors = form::validate_new_user(&new_user, self.clock.today());
        if !errors.is_empty() {
            debug!(count = errors.len(), "Rejected invalid user data");
            return Err(DomainError::validation(errors));
        }

        if self.repo.rut_exists(&new_user.rut).await? {
            return Err(DomainError::rut_already_exists(new_user.rut));
        }

        let now = self.clock.now();
        let user = User {
            id: Uuid::new_v4(),
            rut: new_user.rut,
            full_name: new_user.full_name,
            birth_date: new_user.birth_date,
            child_count: new_user.child_count,
            email: new_user.email,
            phones: new_user.phones,
            addresses: new_user.addresses,
            created_at: now,
            updated_at: now,
        };

        if let Err(e) = self.repo.insert(user.clone()).await {
            // Lost a race against a concurrent create of the same RUT
            if self.repo.rut_exists(&user.rut).await? {
                return Err(DomainError::rut_already_exists(user.rut));
            }
            return Err(e.into());
        }

        self.events.publish(&UserDomainEvent::Created {
            id: user.id,
            at: user.created_at,
        });

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "users_directory.service.update_user",
        skip(self, update),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: Uuid, update: UserUpdate) -> Result<User, DomainError> {
        Self::simulate_latency(self.config.latency).await;
        info!("Updating user");

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        let update = form::sanitize_update(update);
        let errors = form::validate_update(&update, self.clock.today());
        if !errors.is_empty() {
            debug!(count = errors.len(), "Rejected invalid user data");
            return Err(DomainError::validation(errors));
        }

        // Only the whitelisted fields move over; id, rut and created_at stay.
        let updated = User {
            full_name: update.full_name,
            birth_date: update.birth_date,
            child_count: update.child_count,
            email: update.email,
            phones: update.phones,
            addresses: update.addresses,
            updated_at: self.clock.now().max(current.created_at),
            ..current
        };

        if !self.repo.update(updated.clone()).await? {
            return Err(DomainError::user_not_found(id));
        }

        self.events.publish(&UserDomainEvent::Updated {
            id: updated.id,
            at: updated.updated_at,
        });

        info!("Successfully updated user");
        Ok(updated)
    }

    #[instrument(
        name = "users_directory.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: Uuid) -> Result<(), DomainError> {
        Self::simulate_latency(self.config.latency).await;
        info!("Deleting user");

        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        if is_birthday_today(&user.birth_date, self.clock.today()) {
            info!("Refusing to delete user on their birthday");
            return Err(DomainError::birthday_restriction(id));
        }

        if !self.repo.delete(id).await? {
            return Err(DomainError::user_not_found(id));
        }

        self.events.publish(&UserDomainEvent::Deleted {
            id,
            at: self.clock.now(),
        });

        info!("Successfully deleted user");
        Ok(())
    }

    #[instrument(name = "users_directory.service.count_users", skip(self))]
    pub async fn count_users(&self) -> Result<usize, DomainError> {
        Self::simulate_latency(self.config.count_latency).await;
        let count = self.repo.count().await?;
        debug!(count, "Counted users");
        Ok(count)
    }
}
