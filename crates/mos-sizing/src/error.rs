//! Error types for the sizing equations.

use thiserror::Error;

/// Result type for sizing computations.
pub type Result<T> = std::result::Result<T, SizingError>;

/// Errors reported by the closed-form solvers.
///
/// Nothing is caught or retried internally; every failure surfaces at the
/// call that triggered it, and prevention is the caller's responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizingError {
    /// A field the formula reads was never set on the record.
    #[error("parameter `{0}` is not set")]
    MissingParameter(&'static str),

    /// A denominator term evaluated to exactly zero.
    ///
    /// Reported instead of letting the division produce an IEEE infinity.
    #[error("denominator term `{0}` is zero")]
    ZeroDenominator(&'static str),
}
