use thiserror::Error;

/// Validation errors for canonical primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Rejection produced by a field normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The significant characters left after stripping noise have the wrong count.
    #[error("{field} has {found} significant characters, expected {expected}")]
    WrongLength {
        /// Kind of value being normalized.
        field: &'static str,
        /// Number of significant characters found.
        found: usize,
        /// Accepted counts, for display.
        expected: &'static str,
    },
    /// The significant characters do not form an accepted pattern.
    #[error("{field} '{value}' does not match {pattern}")]
    PatternMismatch {
        /// Kind of value being normalized.
        field: &'static str,
        /// Stripped candidate that was tested.
        value: String,
        /// Human-readable pattern.
        pattern: &'static str,
    },
}
