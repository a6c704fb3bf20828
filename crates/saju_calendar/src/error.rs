//! Error types for calendar conversion and solar-term search.

use thiserror::Error;

/// Errors from the calendar collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Year outside the range the calendar tables cover.
    #[error("year {year} outside supported range {min}..={max}")]
    OutOfRange { year: i32, min: i32, max: i32 },
    /// A leap month was requested in a year that has none (or a different one).
    #[error("lunar year {year} has no leap month {month}")]
    NoSuchLeapMonth { year: i32, month: u8 },
    /// Lunar month/day outside the month's length.
    #[error("invalid lunar date: {0}")]
    InvalidLunarDate(String),
    /// Gregorian fields that do not name a real date.
    #[error("invalid solar date {year}-{month:02}-{day:02}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// Iterative search did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
