use canonical_json::to_string;
use serde::Serialize;

/// Error returned when canonicalization fails.
#[derive(thiserror::Error, Debug)]
pub enum CanonicalizationError {
    /// The value could not be converted to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Generic failure.
    #[error("other error: {0}")]
    Other(String),
}

/// Produces RFC 8785 canonical bytes for any serializable value.
///
/// Object keys are sorted and insignificant whitespace removed, so two values
/// that serialize to equal JSON always produce equal bytes.
pub fn canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, CanonicalizationError> {
    let value = serde_json::to_value(value)?;
    let canonical =
        to_string(&value).map_err(|err| CanonicalizationError::Other(err.to_string()))?;
    Ok(canonical.into_bytes())
}
