//! Input sanitizing and field rules for user data.
//!
//! Messages are the user-facing Spanish texts; field names match the
//! serialized (camelCase) names of the contract models.

use chrono::{Datelike, NaiveDate};
use validation::{parse_birth_date, validate_email, validate_phone, validate_rut};

use crate::contract::model::{FieldError, NewUser, UserUpdate};

pub const RUT_INVALID: &str = "RUT inválido";
pub const NAME_REQUIRED: &str = "Nombre es requerido";
pub const BIRTH_DATE_REQUIRED: &str = "Fecha de nacimiento es requerida";
pub const BIRTH_DATE_FUTURE: &str = "La fecha de nacimiento no puede ser futura";
pub const BIRTH_DATE_INVALID: &str = "Fecha de nacimiento inválida";
pub const EMAIL_INVALID: &str = "Email inválido";
pub const PHONE_REQUIRED: &str = "Al menos un teléfono es requerido";
pub const ADDRESS_REQUIRED: &str = "Al menos una dirección es requerida";

/// Birth dates before this year are rejected.
const MIN_BIRTH_YEAR: i32 = 1900;
const MIN_ADDRESS_LEN: usize = 5;

fn trimmed_non_blank(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Trim text fields and drop blank phone/address entries.
pub fn sanitize_new_user(new_user: NewUser) -> NewUser {
    NewUser {
        rut: new_user.rut.trim().to_string(),
        full_name: new_user.full_name.trim().to_string(),
        birth_date: new_user.birth_date.trim().to_string(),
        child_count: new_user.child_count,
        email: new_user.email.trim().to_string(),
        phones: trimmed_non_blank(new_user.phones),
        addresses: trimmed_non_blank(new_user.addresses),
    }
}

/// Same as [`sanitize_new_user`] for updates.
pub fn sanitize_update(update: UserUpdate) -> UserUpdate {
    UserUpdate {
        full_name: update.full_name.trim().to_string(),
        birth_date: update.birth_date.trim().to_string(),
        child_count: update.child_count,
        email: update.email.trim().to_string(),
        phones: trimmed_non_blank(update.phones),
        addresses: trimmed_non_blank(update.addresses),
    }
}

/// Field errors for a (sanitized) creation request; empty means valid.
pub fn validate_new_user(new_user: &NewUser, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if new_user.rut.is_empty() || !validate_rut(&new_user.rut) {
        errors.push(FieldError::new("rut", RUT_INVALID));
    }
    validate_profile(
        Profile {
            full_name: &new_user.full_name,
            birth_date: &new_user.birth_date,
            email: &new_user.email,
            phones: &new_user.phones,
            addresses: &new_user.addresses,
        },
        today,
        &mut errors,
    );
    errors
}

/// Field errors for a (sanitized) update request; empty means valid.
pub fn validate_update(update: &UserUpdate, today: NaiveDate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    validate_profile(
        Profile {
            full_name: &update.full_name,
            birth_date: &update.birth_date,
            email: &update.email,
            phones: &update.phones,
            addresses: &update.addresses,
        },
        today,
        &mut errors,
    );
    errors
}

/// Fields shared by creation and update.
struct Profile<'a> {
    full_name: &'a str,
    birth_date: &'a str,
    email: &'a str,
    phones: &'a [String],
    addresses: &'a [String],
}

fn validate_profile(p: Profile<'_>, today: NaiveDate, errors: &mut Vec<FieldError>) {
    if p.full_name.trim().is_empty() {
        errors.push(FieldError::new("fullName", NAME_REQUIRED));
    }

    if let Some(message) = birth_date_error(p.birth_date, today) {
        errors.push(FieldError::new("birthDate", message));
    }

    if !validate_email(p.email) {
        errors.push(FieldError::new("email", EMAIL_INVALID));
    }

    if p.phones.is_empty() {
        errors.push(FieldError::new("phones", PHONE_REQUIRED));
    }
    for (i, phone) in p.phones.iter().enumerate() {
        if !validate_phone(phone) {
            errors.push(FieldError::new(
                format!("phone_{i}"),
                format!("Teléfono {} inválido", i + 1),
            ));
        }
    }

    if p.addresses.is_empty() {
        errors.push(FieldError::new("addresses", ADDRESS_REQUIRED));
    }
    for (i, address) in p.addresses.iter().enumerate() {
        if !is_plausible_address(address) {
            errors.push(FieldError::new(
                format!("address_{i}"),
                format!("Dirección {} inválida", i + 1),
            ));
        }
    }
}

fn birth_date_error(raw: &str, today: NaiveDate) -> Option<&'static str> {
    if raw.trim().is_empty() {
        return Some(BIRTH_DATE_REQUIRED);
    }
    match parse_birth_date(raw) {
        None => Some(BIRTH_DATE_INVALID),
        Some(date) if date > today => Some(BIRTH_DATE_FUTURE),
        Some(date) if date.year() < MIN_BIRTH_YEAR => Some(BIRTH_DATE_INVALID),
        Some(_) => None,
    }
}

/// At least five characters, not only digits, and containing a letter.
fn is_plausible_address(address: &str) -> bool {
    let address = address.trim();
    address.chars().count() >= MIN_ADDRESS_LEN
        && !address.chars().all(|c| c.is_ascii_digit())
        && address.chars().any(|c| c.is_ascii_alphabetic())
}
