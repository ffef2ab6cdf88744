//! RUT (Rol Único Tributario) checksum, formatting and normalization.
//!
//! A RUT is a 7-8 digit body followed by a check character computed with a
//! modulo-11 weighted sum. It is written either raw (`123456785`) or
//! punctuated (`12.345.678-5`); every function here accepts both.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const MIN_LEN: usize = 8;
const MAX_LEN: usize = 9;

/// Why a string failed to parse as a [`Rut`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RutError {
    #[error("RUT must have 8 or 9 characters without punctuation, got {len}")]
    Length { len: usize },

    #[error("RUT body must contain only digits")]
    NonDigitBody,

    #[error("RUT check character mismatch: expected '{expected}', found '{found}'")]
    CheckDigitMismatch { expected: char, found: char },
}

/// Drop the `.` and `-` separators.
fn strip_punctuation(raw: &str) -> String {
    raw.chars().filter(|c| *c != '.' && *c != '-').collect()
}

/// Canonical comparison key: punctuation stripped, lowercase.
///
/// Two RUTs denote the same person iff their normalized forms are equal.
/// Whitespace is not removed; callers trim their input first.
pub fn normalize_rut(raw: &str) -> String {
    strip_punctuation(raw).to_lowercase()
}

/// Compute the check character for a digit body.
///
/// Digits are weighted right-to-left with multipliers cycling 2..=7. The
/// result is `'0'` for remainder 0, `'k'` for remainder 1, otherwise the digit
/// `11 - remainder`. Returns `None` if the body is empty or has a non-digit.
pub fn check_digit(body: &str) -> Option<char> {
    if body.is_empty() {
        return None;
    }

    let mut sum = 0u32;
    let mut multiplier = 2u32;
    for c in body.chars().rev() {
        sum += c.to_digit(10)? * multiplier;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }

    match sum % 11 {
        0 => Some('0'),
        1 => Some('k'),
        r => char::from_digit(11 - r, 10),
    }
}

/// Whether `raw` is a well-formed RUT with a correct check character.
pub fn validate_rut(raw: &str) -> bool {
    Rut::parse(raw).is_ok()
}

/// Render a RUT as `12.345.678-5`.
///
/// Inputs shorter than 8 characters after stripping punctuation are returned
/// unchanged. The check character keeps the caller's casing.
pub fn format_rut(raw: &str) -> String {
    let clean = strip_punctuation(raw);
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() < MIN_LEN {
        return raw.to_string();
    }

    let (body, check) = chars.split_at(chars.len() - 1);
    let mut out = group_thousands(body);
    out.push('-');
    out.push(check[0]);
    out
}

/// Insert a `.` every three characters counted from the right.
fn group_thousands(body: &[char]) -> String {
    let mut out = String::with_capacity(body.len() + body.len() / 3);
    for (i, c) in body.iter().enumerate() {
        if i > 0 && (body.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*c);
    }
    out
}

/// A validated RUT.
///
/// Stored as the digit body plus the lowercase check character; `Display`
/// renders the punctuated form with an uppercase `K`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rut {
    body: String,
    check: char,
}

impl Rut {
    pub fn parse(raw: &str) -> Result<Self, RutError> {
        let clean = normalize_rut(raw);
        let len = clean.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return Err(RutError::Length { len });
        }

        let split = clean.len() - clean.chars().last().map_or(0, char::len_utf8);
        let (body, found) = clean.split_at(split);
        let found = found.chars().next().ok_or(RutError::Length { len })?;

        let expected = check_digit(body).ok_or(RutError::NonDigitBody)?;
        if expected != found {
            return Err(RutError::CheckDigitMismatch { expected, found });
        }

        Ok(Self {
            body: body.to_string(),
            check: found,
        })
    }

    /// Digits before the check character.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Lowercase check character (`0`-`9` or `k`).
    pub fn check(&self) -> char {
        self.check
    }

    /// Same key as [`normalize_rut`].
    pub fn normalized(&self) -> String {
        format!("{}{}", self.body, self.check)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body: Vec<char> = self.body.chars().collect();
        write!(
            f,
            "{}-{}",
            group_thousands(&body),
            self.check.to_ascii_uppercase()
        )
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
