use tracing::info;

use crate::domain::events::UserDomainEvent;
use crate::domain::ports::EventPublisher;

/// Publishes domain events as structured log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventPublisher;

impl EventPublisher<UserDomainEvent> for TracingEventPublisher {
    fn publish(&self, event: &UserDomainEvent) {
        match event {
            UserDomainEvent::Created { id, at } => {
                info!(user_id = %id, at = %at, "user created")
            }
            UserDomainEvent::Updated { id, at } => {
                info!(user_id = %id, at = %at, "user updated")
            }
            UserDomainEvent::Deleted { id, at } => {
                info!(user_id = %id, at = %at, "user deleted")
            }
        }
    }
}
