use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::service::ServiceConfig;

/// Configuration for the users_directory module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersDirectoryConfig {
    /// Simulated latency for every operation except count.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    #[serde(default = "default_count_latency_ms")]
    pub count_latency_ms: u64,
    /// Start with the sample users instead of an empty directory.
    #[serde(default = "default_seed_demo_users")]
    pub seed_demo_users: bool,
}

impl Default for UsersDirectoryConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            count_latency_ms: default_count_latency_ms(),
            seed_demo_users: default_seed_demo_users(),
        }
    }
}

impl From<&UsersDirectoryConfig> for ServiceConfig {
    fn from(cfg: &UsersDirectoryConfig) -> Self {
        Self {
            latency: Duration::from_millis(cfg.latency_ms),
            count_latency: Duration::from_millis(cfg.count_latency_ms),
        }
    }
}

fn default_latency_ms() -> u64 {
    500
}

fn default_count_latency_ms() -> u64 {
    200
}

fn default_seed_demo_users() -> bool {
    true
}
