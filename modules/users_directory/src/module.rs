use std::sync::Arc;

use tracing::{debug, info};

use crate::config::UsersDirectoryConfig;
use crate::contract::client::UsersDirectoryApi;
use crate::domain::events::UserDomainEvent;
use crate::domain::ports::{Clock, EventPublisher};
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersDirectoryLocalClient;
use crate::infra::clock::SystemClock;
use crate::infra::events::TracingEventPublisher;
use crate::infra::storage::{seed, InMemoryUsersRepository};

/// Users directory module: wires the in-memory repository, clock and event
/// publisher into the domain service and exposes the envelope API.
#[derive(Clone)]
pub struct UsersDirectory {
    service: Arc<Service>,
    api: Arc<dyn UsersDirectoryApi>,
}

impl UsersDirectory {
    /// Production wiring from module configuration.
    pub fn init(cfg: &UsersDirectoryConfig) -> Self {
        info!("Initializing users_directory module");
        debug!(
            "Loaded users_directory config: latency_ms={}, count_latency_ms={}, seed_demo_users={}",
            cfg.latency_ms, cfg.count_latency_ms, cfg.seed_demo_users
        );

        let clock = Arc::new(SystemClock);
        let repo = if cfg.seed_demo_users {
            InMemoryUsersRepository::with_users(seed::demo_users(clock.now()))
        } else {
            InMemoryUsersRepository::new()
        };

        Self::from_parts(
            Arc::new(repo),
            Arc::new(TracingEventPublisher),
            clock,
            ServiceConfig::from(cfg),
        )
    }

    /// Wire explicit ports, e.g. a seeded repository or a fixed clock.
    pub fn from_parts(
        repo: Arc<dyn UsersRepository>,
        events: Arc<dyn EventPublisher<UserDomainEvent>>,
        clock: Arc<dyn Clock>,
        config: ServiceConfig,
    ) -> Self {
        let service = Arc::new(Service::new(repo, events, clock, config));
        let api: Arc<dyn UsersDirectoryApi> =
            Arc::new(UsersDirectoryLocalClient::new(service.clone()));
        Self { service, api }
    }

    /// Envelope-returning API for callers.
    pub fn api(&self) -> Arc<dyn UsersDirectoryApi> {
        self.api.clone()
    }

    /// Direct access to the domain service (typed errors instead of envelopes).
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }
}
