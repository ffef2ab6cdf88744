use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for timestamps and of "today" for date rules.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The caller's current calendar date.
    fn today(&self) -> NaiveDate;
}
