use oec_canonical::{CountryCode, ProvinceCode};
use serde::{Deserialize, Serialize};

/// A country that owns provinces or states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Two-letter country code.
    pub country_code: CountryCode,
    /// Display name.
    pub name: String,
    /// Example postal code shape, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_pattern: Option<String>,
    /// Example phone number shape, for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_pattern: Option<String>,
}

/// A province or state and the country that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    /// Two-letter province or state code.
    pub province_code: ProvinceCode,
    /// Display name.
    pub name: String,
    /// Owning country.
    pub country_code: CountryCode,
}

/// Reference data file contents.
///
/// Codes are parsed on deserialization, so a code that is not two letters
/// fails the whole file. Cross-record checks happen in
/// [`ProvinceTable::from_data`](crate::ProvinceTable::from_data).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Countries on file.
    #[serde(default)]
    pub countries: Vec<Country>,
    /// Provinces and states on file.
    #[serde(default)]
    pub provinces: Vec<Province>,
}
