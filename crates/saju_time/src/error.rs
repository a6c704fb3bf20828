//! Error types for civil-time handling and date adapters.

use thiserror::Error;

/// Errors from civil-time construction, arithmetic, or a date adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A date/time field is outside its valid range.
    #[error("invalid {field}: {value}")]
    InvalidField { field: &'static str, value: i64 },
    /// The adapter could not resolve a timezone or UTC offset.
    #[error("unresolved timezone: {0}")]
    UnresolvedTimezone(String),
    /// Arithmetic left the representable range of the date type.
    #[error("date arithmetic out of range")]
    OutOfRange,
    /// Text could not be parsed as a civil date/time.
    #[error("parse error: {0}")]
    Parse(String),
}
