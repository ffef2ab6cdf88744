#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use users_directory::contract::model::{NewUser, User, UserUpdate};
use users_directory::domain::events::UserDomainEvent;
use users_directory::domain::ports::{Clock, EventPublisher};
use users_directory::domain::repo::UsersRepository;
use users_directory::domain::service::ServiceConfig;
use users_directory::infra::storage::InMemoryUsersRepository;
use users_directory::UsersDirectory;

/// Clock pinned to a given date (noon UTC).
#[derive(Clone)]
pub struct FixedClock {
    pub today: NaiveDate,
}

impl FixedClock {
    pub fn on(y: i32, m: u32, d: u32) -> Self {
        Self {
            today: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.today.and_hms_opt(12, 0, 0).unwrap())
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Keeps every published event for assertions.
#[derive(Default)]
pub struct RecordingPublisher {
    pub events: Mutex<Vec<UserDomainEvent>>,
}

impl RecordingPublisher {
    pub fn take(&self) -> Vec<UserDomainEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventPublisher<UserDomainEvent> for RecordingPublisher {
    fn publish(&self, event: &UserDomainEvent) {
        self.events.lock().push(event.clone());
    }
}

/// Repository whose every call fails, standing in for a corrupted store.
pub struct FailingRepository;

#[async_trait::async_trait]
impl UsersRepository for FailingRepository {
    async fn list_all(&self) -> Result<Vec<User>> {
        Err(anyhow!("store unavailable"))
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>> {
        Err(anyhow!("store unavailable"))
    }

    async fn rut_exists(&self, _rut: &str) -> Result<bool> {
        Err(anyhow!("store unavailable"))
    }

    async fn insert(&self, _u: User) -> Result<()> {
        Err(anyhow!("store unavailable"))
    }

    async fn update(&self, _u: User) -> Result<bool> {
        Err(anyhow!("store unavailable"))
    }

    async fn delete(&self, _id: Uuid) -> Result<bool> {
        Err(anyhow!("store unavailable"))
    }

    async fn count(&self) -> Result<usize> {
        Err(anyhow!("store unavailable"))
    }
}

/// Removes each user right after it is looked up, as if a concurrent
/// delete landed between the lookup and the write.
pub struct VanishingRepository {
    pub inner: InMemoryUsersRepository,
}

#[async_trait::async_trait]
impl UsersRepository for VanishingRepository {
    async fn list_all(&self) -> Result<Vec<User>> {
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let found = self.inner.find_by_id(id).await?;
        self.inner.delete(id).await?;
        Ok(found)
    }

    async fn rut_exists(&self, rut: &str) -> Result<bool> {
        self.inner.rut_exists(rut).await
    }

    async fn insert(&self, u: User) -> Result<()> {
        self.inner.insert(u).await
    }

    async fn update(&self, u: User) -> Result<bool> {
        self.inner.update(u).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.inner.delete(id).await
    }

    async fn count(&self) -> Result<usize> {
        self.inner.count().await
    }
}

/// Answers the first RUT lookup with "free", as if another create stored the
/// same RUT between the duplicate check and the insert.
pub struct StaleRutCheck {
    pub inner: InMemoryUsersRepository,
    stale: AtomicBool,
}

impl StaleRutCheck {
    pub fn new(inner: InMemoryUsersRepository) -> Self {
        Self {
            inner,
            stale: AtomicBool::new(true),
        }
    }
}

#[async_trait::async_trait]
impl UsersRepository for StaleRutCheck {
    async fn list_all(&self) -> Result<Vec<User>> {
        self.inner.list_all().await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn rut_exists(&self, rut: &str) -> Result<bool> {
        if self.stale.swap(false, Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.rut_exists(rut).await
    }

    async fn insert(&self, u: User) -> Result<()> {
        self.inner.insert(u).await
    }

    async fn update(&self, u: User) -> Result<bool> {
        self.inner.update(u).await
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        self.inner.delete(id).await
    }

    async fn count(&self) -> Result<usize> {
        self.inner.count().await
    }
}

/// Directory over an arbitrary repository, no latency.
pub fn directory_over(repo: Arc<dyn UsersRepository>, clock: FixedClock) -> UsersDirectory {
    UsersDirectory::from_parts(
        repo,
        Arc::new(RecordingPublisher::default()),
        Arc::new(clock),
        ServiceConfig::immediate(),
    )
}

pub struct Harness {
    pub directory: UsersDirectory,
    pub repo: Arc<InMemoryUsersRepository>,
    pub events: Arc<RecordingPublisher>,
    pub clock: FixedClock,
}

impl Harness {
    pub fn clock_now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}

/// Directory over an in-memory repository seeded with `users`, no latency.
pub fn harness(users: Vec<User>, clock: FixedClock) -> Harness {
    let repo = Arc::new(InMemoryUsersRepository::with_users(users));
    let events = Arc::new(RecordingPublisher::default());
    let directory = UsersDirectory::from_parts(
        repo.clone(),
        events.clone(),
        Arc::new(clock.clone()),
        ServiceConfig::immediate(),
    );
    Harness {
        directory,
        repo,
        events,
        clock,
    }
}

pub fn failing_directory(clock: FixedClock) -> UsersDirectory {
    UsersDirectory::from_parts(
        Arc::new(FailingRepository),
        Arc::new(RecordingPublisher::default()),
        Arc::new(clock),
        ServiceConfig::immediate(),
    )
}

pub fn new_user(rut: &str, birth_date: &str) -> NewUser {
    NewUser {
        rut: rut.to_string(),
        full_name: "New User".to_string(),
        birth_date: birth_date.to_string(),
        child_count: 1,
        email: "new@example.com".to_string(),
        phones: vec!["+56987654321".to_string()],
        addresses: vec!["New Address 456".to_string()],
    }
}

pub fn update_for(user: &User) -> UserUpdate {
    UserUpdate::from(user)
}

pub fn stored_user(rut: &str, birth_date: &str) -> User {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    User {
        id: Uuid::new_v4(),
        rut: rut.to_string(),
        full_name: "Test User".to_string(),
        birth_date: birth_date.to_string(),
        child_count: 2,
        email: "test@example.com".to_string(),
        phones: vec!["+56912345678".to_string()],
        addresses: vec!["Test Address 123".to_string()],
        created_at: at,
        updated_at: at,
    }
}

/// `YYYY-MM-DD` for the same month/day as `date`, in `year`.
pub fn same_day_in(year: i32, date: NaiveDate) -> String {
    format!("{year:04}-{:02}-{:02}", date.month(), date.day())
}
