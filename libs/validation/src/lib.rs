//! Pure field validators for Chilean user records.
//!
//! Everything here is stateless: no I/O, no clocks. Date-dependent checks take
//! the reference date as an argument so callers decide what "today" means.

pub mod contact;
pub mod dates;
pub mod rut;

pub use contact::{validate_email, validate_phone};
pub use dates::{calculate_age, is_birthday_today, parse_birth_date};
pub use rut::{format_rut, normalize_rut, validate_rut, Rut, RutError};
