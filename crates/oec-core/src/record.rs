use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use oec_canonical::{canonical_bytes, CanonicalizationError, Digest};
use serde::{Deserialize, Deserializer, Serialize};

/// Farm record fields, named as they are reported in field errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FarmField {
    /// Farm name.
    Name,
    /// Street address.
    Address,
    /// Town.
    Town,
    /// County.
    County,
    /// Province or state code.
    ProvinceCode,
    /// Postal or ZIP code.
    PostalCode,
    /// Home phone.
    HomePhone,
    /// Cell phone.
    CellPhone,
    /// Email address.
    Email,
    /// Driving directions.
    Directions,
    /// Date the farm joined the program.
    DateJoined,
    /// Date of the most recent contact.
    LastContactDate,
}

impl FarmField {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Town => "Town",
            Self::County => "County",
            Self::ProvinceCode => "Province",
            Self::PostalCode => "Postal (Zip) Code",
            Self::HomePhone => "Home Phone",
            Self::CellPhone => "Cell Phone",
            Self::Email => "Email",
            Self::Directions => "Directions",
            Self::DateJoined => "Date Joined",
            Self::LastContactDate => "Last Contact",
        }
    }
}

impl fmt::Display for FarmField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Untrusted farm record as entered by a user.
///
/// Only `name` and `province_code` are required; when they are missing or
/// `null` in JSON they deserialize as empty strings so the validator can
/// report them as field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFarmInput {
    /// Farm name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Town.
    #[serde(default)]
    pub town: Option<String>,
    /// County.
    #[serde(default)]
    pub county: Option<String>,
    /// Province or state code.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub province_code: String,
    /// Postal or ZIP code.
    #[serde(default)]
    pub postal_code: Option<String>,
    /// Home phone.
    #[serde(default)]
    pub home_phone: Option<String>,
    /// Cell phone.
    #[serde(default)]
    pub cell_phone: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Driving directions.
    #[serde(default)]
    pub directions: Option<String>,
    /// Date the farm joined the program.
    #[serde(default, deserialize_with = "date_input")]
    pub date_joined: Option<NaiveDateTime>,
    /// Date of the most recent contact.
    #[serde(default, deserialize_with = "date_input")]
    pub last_contact_date: Option<NaiveDateTime>,
}

/// Farm record after successful validation.
///
/// Text fields are trimmed and title-cased, structured fields are in
/// canonical form, and fields that were blank are `None`. Only the validator
/// builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct NormalizedFarmRecord {
    /// Farm name, title-cased.
    pub name: String,
    /// Street address, title-cased.
    pub address: Option<String>,
    /// Town, title-cased.
    pub town: Option<String>,
    /// County, title-cased.
    pub county: Option<String>,
    /// Province or state code, trimmed.
    pub province_code: String,
    /// Postal or ZIP code in the canonical form of the owning country.
    pub postal_code: Option<String>,
    /// Home phone as `###-###-####`.
    pub home_phone: Option<String>,
    /// Cell phone as `###-###-####`.
    pub cell_phone: Option<String>,
    /// Email address, trimmed.
    pub email: Option<String>,
    /// Driving directions, trimmed.
    pub directions: Option<String>,
    /// Date the farm joined the program.
    pub date_joined: Option<NaiveDateTime>,
    /// Date of the most recent contact.
    pub last_contact_date: Option<NaiveDateTime>,
}

impl NormalizedFarmRecord {
    /// SHA-256 over the canonical JSON of the record.
    ///
    /// Equal records always have equal fingerprints, so callers can skip
    /// writes for edits that normalize to the stored value.
    pub fn fingerprint(&self) -> Result<Digest, CanonicalizationError> {
        Ok(Digest::sha256(&canonical_bytes(self)?))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.f]` or `YYYY-MM-DD HH:MM:SS[.f]`.
/// Blank strings and `null` are absent dates.
fn date_input<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date_input(s).map(Some).map_err(serde::de::Error::custom),
    }
}

fn parse_date_input(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map(|d| d.and_time(NaiveTime::MIN))
}
