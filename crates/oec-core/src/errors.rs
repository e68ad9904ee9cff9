use thiserror::Error;

/// Core error types.
///
/// These are faults of the surrounding configuration, never problems with the
/// submitted record; record problems are reported as field errors.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The reference lookup could not be consulted.
    #[error("reference lookup unavailable: {0}")]
    LookupUnavailable(#[from] crate::lookup::LookupError),
}
