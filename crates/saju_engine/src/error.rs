//! Error types for pillar derivation.

use saju_base::CycleError;
use saju_calendar::CalendarError;
use saju_time::TimeError;
use thiserror::Error;

/// Errors from the engine entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The date adapter could not resolve a field or timezone.
    #[error("invalid instant: {0}")]
    InvalidInstant(#[from] TimeError),
    /// A stem/branch pair outside the sexagenary cycle.
    #[error("invalid combination: {0}")]
    InvalidCombination(#[from] CycleError),
    /// Propagated from the calendar collaborator.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// A preset whose fields are out of range.
    #[error("invalid preset {key}: {reason}")]
    InvalidPreset { key: String, reason: String },
}
