use serde::{Deserialize, Serialize};

use crate::record::{FarmField, NormalizedFarmRecord};

/// Kind of business rule a field error violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A postal, ZIP or phone value failed its pattern check.
    FormatInvalid,
    /// Name is empty, or neither of a required pair is present.
    RequiredFieldMissing,
    /// Neither email nor a full mailing address (address and postal code) is present.
    ConditionalRequirementUnmet,
    /// The province code is not in the reference data.
    ReferenceNotFound,
    /// A date is in the future or out of order with another date.
    TemporalOrderViolation,
}

/// One rejection reason tied to one or more fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Fields the error concerns, in display order.
    pub fields: Vec<FarmField>,
    /// Rule that was violated.
    pub kind: ErrorKind,
    /// Message for the person editing the record.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(kind: ErrorKind, fields: &[FarmField], message: impl Into<String>) -> Self {
        Self {
            fields: fields.to_vec(),
            kind,
            message: message.into(),
        }
    }

    /// Returns true if the error names `field`.
    pub fn concerns(&self, field: FarmField) -> bool {
        self.fields.contains(&field)
    }
}

/// Result of validating one farm record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "detail", rename_all = "lowercase")]
pub enum ValidationOutcome {
    /// Every rule passed.
    Accepted(NormalizedFarmRecord),
    /// At least one rule failed; errors are in rule order.
    Rejected(Vec<FieldError>),
}

impl ValidationOutcome {
    /// Returns true for [`ValidationOutcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The normalized record, if accepted.
    pub fn record(&self) -> Option<&NormalizedFarmRecord> {
        match self {
            Self::Accepted(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// The field errors; empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<NormalizedFarmRecord, Vec<FieldError>> {
        match self {
            Self::Accepted(record) => Ok(record),
            Self::Rejected(errors) => Err(errors),
        }
    }
}
