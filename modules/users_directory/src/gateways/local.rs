use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::contract::{
    client::UsersDirectoryApi,
    error::UsersDirectoryError,
    model::{NewUser, User, UserUpdate},
    response::{ApiResponse, Operation},
};
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Local implementation of the UsersDirectoryApi trait that delegates to the domain service
/// and folds every outcome into an envelope.
pub struct UsersDirectoryLocalClient {
    service: Arc<Service>,
}

impl UsersDirectoryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

/// Log storage faults (their detail is not shown to callers) and map to the contract error.
fn to_contract(op: Operation, e: DomainError) -> UsersDirectoryError {
    if let DomainError::Storage { message } = &e {
        warn!(operation = ?op, error = %message, "users directory operation failed");
    }
    e.into()
}

fn respond<T>(op: Operation, result: Result<T, DomainError>) -> ApiResponse<T> {
    ApiResponse::from_result(op, result.map_err(|e| to_contract(op, e)))
}

#[async_trait]
impl UsersDirectoryApi for UsersDirectoryLocalClient {
    async fn list_all(&self) -> ApiResponse<Vec<User>> {
        respond(Operation::ListAll, self.service.list_users().await)
    }

    async fn get_by_id(&self, id: Uuid) -> ApiResponse<User> {
        respond(Operation::GetById, self.service.get_user(id).await)
    }

    async fn create(&self, new_user: NewUser) -> ApiResponse<User> {
        respond(Operation::Create, self.service.create_user(new_user).await)
    }

    async fn update(&self, id: Uuid, update: UserUpdate) -> ApiResponse<User> {
        respond(Operation::Update, self.service.update_user(id, update).await)
    }

    async fn delete(&self, id: Uuid) -> ApiResponse<()> {
        let op = Operation::Delete;
        let result = self.service.delete_user(id).await;
        ApiResponse::from_unit(op, result.map_err(|e| to_contract(op, e)))
    }

    async fn count(&self) -> ApiResponse<usize> {
        respond(Operation::Count, self.service.count_users().await)
    }
}
