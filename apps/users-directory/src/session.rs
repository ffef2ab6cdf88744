//! JSON-lines session over the directory API.
//!
//! Each input line is one request, tagged by `op`; each request gets exactly
//! one envelope line back. Directory operations need a prior `login`.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};
use users_directory::contract::{ApiResponse, NewUser, UserUpdate, UsersDirectoryApi};
use uuid::Uuid;

use crate::auth::{AuthUser, DemoAuthenticator};

pub const LOGIN_REQUIRED: &str = "Debe iniciar sesión";
const USER_NOT_FOUND: &str = "Usuario no encontrado";

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    Login { username: String, password: String },
    Logout,
    Whoami,
    List,
    Get { id: String },
    Create { user: NewUser },
    Update { id: String, user: UserUpdate },
    Delete { id: String },
    Count,
}

pub struct Session {
    api: Arc<dyn UsersDirectoryApi>,
    auth: DemoAuthenticator,
    user: Option<AuthUser>,
}

fn envelope<T: Serialize>(resp: ApiResponse<T>) -> Value {
    serde_json::to_value(resp).unwrap_or_else(|e| {
        serde_json::json!({ "success": false, "message": format!("Error interno: {e}") })
    })
}

/// Ids that are not UUIDs cannot name a stored user.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

impl Session {
    pub fn new(api: Arc<dyn UsersDirectoryApi>, auth: DemoAuthenticator) -> Self {
        Self {
            api,
            auth,
            user: None,
        }
    }

    pub fn current_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Answer one raw input line.
    pub async fn handle_line(&mut self, line: &str) -> Value {
        match serde_json::from_str::<Request>(line) {
            Ok(req) => self.handle(req).await,
            Err(e) => {
                debug!(error = %e, "Rejected malformed request");
                envelope(ApiResponse::<()>::fail(format!("Solicitud inválida: {e}")))
            }
        }
    }

    pub async fn handle(&mut self, req: Request) -> Value {
        match req {
            Request::Login { username, password } => {
                match self.auth.login(&username, &password) {
                    Ok(user) => {
                        info!(username = %user.username, "Session logged in");
                        self.user = Some(user.clone());
                        envelope(ApiResponse::ok(user))
                    }
                    Err(e) => envelope(ApiResponse::<()>::fail(e.to_string())),
                }
            }
            Request::Logout => {
                if let Some(user) = self.user.take() {
                    info!(username = %user.username, "Session logged out");
                }
                envelope(ApiResponse::<()>::ok_empty())
            }
            Request::Whoami => match &self.user {
                Some(user) => envelope(ApiResponse::ok(user.clone())),
                None => envelope(ApiResponse::<()>::fail(LOGIN_REQUIRED)),
            },
            _ if self.user.is_none() => envelope(ApiResponse::<()>::fail(LOGIN_REQUIRED)),
            Request::List => envelope(self.api.list_all().await),
            Request::Get { id } => match parse_id(&id) {
                Some(id) => envelope(self.api.get_by_id(id).await),
                None => envelope(ApiResponse::<()>::fail(USER_NOT_FOUND)),
            },
            Request::Create { user } => envelope(self.api.create(user).await),
            Request::Update { id, user } => match parse_id(&id) {
                Some(id) => envelope(self.api.update(id, user).await),
                None => envelope(ApiResponse::<()>::fail(USER_NOT_FOUND)),
            },
            Request::Delete { id } => match parse_id(&id) {
                Some(id) => envelope(self.api.delete(id).await),
                None => envelope(ApiResponse::<()>::fail(USER_NOT_FOUND)),
            },
            Request::Count => envelope(self.api.count().await),
        }
    }

    /// Serve requests until `input` is exhausted. Blank lines are skipped.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await.context("Failed to read request")? {
            if line.trim().is_empty() {
                continue;
            }
            let reply = self.handle_line(&line).await;
            let mut encoded = serde_json::to_string(&reply)?;
            encoded.push('\n');
            output
                .write_all(encoded.as_bytes())
                .await
                .context("Failed to write response")?;
            output.flush().await?;
        }
        Ok(())
    }
}
