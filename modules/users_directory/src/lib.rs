// === PUBLIC CONTRACT ===
// Callers (CLI, tests, other crates) should depend on the contract only.
pub mod contract;

pub use contract::{client, error, model, response};

// === MODULE DEFINITION ===
pub mod module;
pub use module::UsersDirectory;

// === INTERNAL MODULES ===
// Exposed for wiring alternative ports in tests; not a stable API.
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
