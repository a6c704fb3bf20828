//! Error types for sexagenary symbols and pillars.

use thiserror::Error;

/// Errors from building stems, branches and pillars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch polarity differ; the pair is not in the 60-cycle.
    #[error("stem {stem} and branch {branch} do not form a sexagenary pair")]
    InvalidCombination { stem: u8, branch: u8 },
    /// Ordinal or character that names no stem/branch.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    /// Pillar label that is not exactly one stem followed by one branch.
    #[error("malformed pillar label: {0:?}")]
    MalformedLabel(String),
}
