//! Farm record model and cross-field validation for OEC.
//!
//! This crate provides:
//! - The as-entered [`RawFarmInput`] and the validated [`NormalizedFarmRecord`]
//! - [`FarmRecordValidator`], which normalizes every field and collects all
//!   business-rule violations in one pass
//! - The [`ReferenceLookup`] seam through which province codes resolve to countries
//! - Province code screening for interactive entry
//!
//! Core invariants:
//! - Validation never mutates its input; the normalized record is a new value
//! - Errors are reported in rule order, and a record is rejected iff at least
//!   one error was found
//! - A province missing from reference data is a field error, while a lookup
//!   that cannot be consulted at all is a [`CoreError`]
//!
#![deny(missing_docs)]

/// Error types for core operations.
pub mod errors;
/// Reference lookup trait and in-memory implementations.
pub mod lookup;
/// Validation outcome and field error types.
pub mod outcome;
/// Raw and normalized farm records.
pub mod record;
/// Province code screening.
pub mod screening;
/// The farm record validator.
pub mod validator;

pub use errors::CoreError;
pub use lookup::{LookupError, ReferenceLookup};
pub use outcome::{ErrorKind, FieldError, ValidationOutcome};
pub use record::{FarmField, NormalizedFarmRecord, RawFarmInput};
pub use screening::{screen_province_code, ScreenedProvince, ScreeningError};
pub use validator::{validate, FarmRecordValidator};
