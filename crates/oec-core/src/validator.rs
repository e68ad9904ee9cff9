use chrono::{Local, NaiveDateTime};
use oec_canonical::{is_not_future_at, normalize_phone, normalize_title_case, PostalFormat};
use tracing::{debug, debug_span};

use crate::errors::CoreError;
use crate::lookup::ReferenceLookup;
use crate::outcome::{ErrorKind, FieldError, ValidationOutcome};
use crate::record::{FarmField, NormalizedFarmRecord, RawFarmInput};

/// Validates farm records against a reference lookup.
///
/// Every rule runs on every call; errors are collected in rule order rather
/// than stopping at the first. The validator holds no mutable state and can
/// be shared between threads whenever the lookup can.
#[derive(Debug, Clone)]
pub struct FarmRecordValidator<L> {
    lookup: L,
}

impl<L: ReferenceLookup> FarmRecordValidator<L> {
    /// Creates a validator over `lookup`.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Validates `raw` using the local wall clock for date rules.
    pub fn validate(&self, raw: &RawFarmInput) -> Result<ValidationOutcome, CoreError> {
        self.validate_at(raw, Local::now().naive_local())
    }

    /// Validates `raw`, treating `now` as the current time.
    ///
    /// Returns `Err` only when the lookup cannot be consulted; every problem
    /// with the record itself is reported in the outcome.
    pub fn validate_at(
        &self,
        raw: &RawFarmInput,
        now: NaiveDateTime,
    ) -> Result<ValidationOutcome, CoreError> {
        let span = debug_span!("validate_farm");
        let _enter = span.enter();
        let mut errors = ErrorLog::default();

        let name = title_case_field(&raw.name);
        if name.is_none() {
            errors.push(
                ErrorKind::RequiredFieldMissing,
                &[FarmField::Name],
                "Name cannot be an empty string",
            );
        }
        let address = raw.address.as_deref().and_then(title_case_field);
        let town = raw.town.as_deref().and_then(title_case_field);
        let county = raw.county.as_deref().and_then(title_case_field);

        let province_code = raw.province_code.trim().to_string();
        let postal_code = raw.postal_code.as_deref().and_then(trim_field);
        let home_phone = raw.home_phone.as_deref().and_then(trim_field);
        let cell_phone = raw.cell_phone.as_deref().and_then(trim_field);
        let email = raw.email.as_deref().and_then(trim_field);
        let directions = raw.directions.as_deref().and_then(trim_field);

        if town.is_none() && county.is_none() {
            errors.push(
                ErrorKind::RequiredFieldMissing,
                &[FarmField::Town, FarmField::County],
                "At least one of Town or County must be provided.",
            );
        }

        if email.is_none() && (address.is_none() || postal_code.is_none()) {
            errors.push(
                ErrorKind::ConditionalRequirementUnmet,
                &[FarmField::Email, FarmField::Address, FarmField::PostalCode],
                "Either email, or both address and postal code must be provided.",
            );
        }

        let mut canonical_postal = postal_code.clone();
        match self.lookup.resolve_country(&province_code)? {
            None => errors.push(
                ErrorKind::ReferenceNotFound,
                &[FarmField::ProvinceCode],
                "Province Code is not on file, please enter an existing Province Code.",
            ),
            Some(country) => {
                let format = PostalFormat::for_country(&country);
                if let (Some(format), Some(code)) = (format, postal_code.as_deref()) {
                    match format.normalize(code) {
                        Ok(normalized) => canonical_postal = Some(normalized),
                        Err(_) => errors.push(
                            ErrorKind::FormatInvalid,
                            &[FarmField::PostalCode],
                            format!(
                                "Postal (Zip) Code is not a valid {} pattern: {}",
                                format.label(),
                                format.expected_pattern()
                            ),
                        ),
                    }
                }
            }
        }

        if home_phone.is_none() && cell_phone.is_none() {
            errors.push(
                ErrorKind::RequiredFieldMissing,
                &[FarmField::HomePhone, FarmField::CellPhone],
                "Either one of Home Phone or Cell Phone is required",
            );
        }
        let home_phone = check_phone(home_phone, FarmField::HomePhone, &mut errors);
        let cell_phone = check_phone(cell_phone, FarmField::CellPhone, &mut errors);

        for (field, value) in [
            (FarmField::DateJoined, raw.date_joined),
            (FarmField::LastContactDate, raw.last_contact_date),
        ] {
            if !is_not_future_at(value, now) {
                errors.push(
                    ErrorKind::TemporalOrderViolation,
                    &[field],
                    format!("{} is an invalid date. Cannot be in the future.", field.label()),
                );
            }
        }
        match (raw.date_joined, raw.last_contact_date) {
            (None, Some(_)) => errors.push(
                ErrorKind::TemporalOrderViolation,
                &[FarmField::LastContactDate],
                "Last Contact date cannot be provided unless Date Joined is available",
            ),
            (Some(joined), Some(contacted)) if joined > contacted => errors.push(
                ErrorKind::TemporalOrderViolation,
                &[FarmField::LastContactDate],
                "A farmer cannot be contacted before they have joined the program.",
            ),
            _ => {}
        }

        if !errors.0.is_empty() {
            debug!(errors = errors.0.len(), "farm record rejected");
            return Ok(ValidationOutcome::Rejected(errors.0));
        }

        debug!("farm record accepted");
        Ok(ValidationOutcome::Accepted(NormalizedFarmRecord {
            name: name.unwrap_or_default(),
            address,
            town,
            county,
            province_code,
            postal_code: canonical_postal,
            home_phone,
            cell_phone,
            email,
            directions,
            date_joined: raw.date_joined,
            last_contact_date: raw.last_contact_date,
        }))
    }
}

/// Validates `raw` against `lookup` with a one-off validator.
pub fn validate<L: ReferenceLookup + ?Sized>(
    raw: &RawFarmInput,
    lookup: &L,
) -> Result<ValidationOutcome, CoreError> {
    FarmRecordValidator::new(lookup).validate(raw)
}

#[derive(Default)]
struct ErrorLog(Vec<FieldError>);

impl ErrorLog {
    // Field values are contact data and are never logged.
    fn push(&mut self, kind: ErrorKind, fields: &[FarmField], message: impl Into<String>) {
        debug!(?kind, ?fields, "field error");
        self.0.push(FieldError::new(kind, fields, message));
    }
}

fn title_case_field(value: &str) -> Option<String> {
    let normalized = normalize_title_case(value.trim());
    (!normalized.is_empty()).then_some(normalized)
}

fn trim_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn check_phone(
    value: Option<String>,
    field: FarmField,
    errors: &mut ErrorLog,
) -> Option<String> {
    let value = value?;
    match normalize_phone(&value) {
        Ok(formatted) => Some(formatted),
        Err(_) => {
            errors.push(
                ErrorKind::FormatInvalid,
                &[field],
                "Not a valid phone number, must be 10 digits.",
            );
            Some(value)
        }
    }
}
