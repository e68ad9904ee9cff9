//! Error types for reference data.

use thiserror::Error;

/// Errors that can occur while loading reference data.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error while reading the reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The reference file is not valid JSON or a code is malformed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A country code appears more than once.
    #[error("duplicate country code {0}")]
    DuplicateCountry(String),
    /// A province code appears more than once.
    #[error("duplicate province code {0}")]
    DuplicateProvince(String),
    /// A province names a country that is not in the file.
    #[error("province {province} references unknown country {country}")]
    UnknownCountry {
        /// Province code.
        province: String,
        /// Country code it references.
        country: String,
    },
}
