pub mod client;
pub mod error;
pub mod model;
pub mod response;

pub use client::UsersDirectoryApi;
pub use error::UsersDirectoryError;
pub use model::{FieldError, NewUser, User, UserUpdate};
pub use response::{ApiResponse, Operation};
