use oec_canonical::{CountryCode, ProvinceCode};
use serde::Serialize;
use thiserror::Error;

use crate::lookup::{LookupError, ReferenceLookup};

/// Why a province code was refused at entry time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreeningError {
    /// The code contains something other than letters.
    #[error("Please enter letters only.")]
    NotLetters,
    /// The code is letters only but not two of them.
    #[error("Province Code must be 2 letters long")]
    WrongLength {
        /// Number of letters entered.
        found: usize,
    },
    /// The code is well-formed but not in the reference data.
    #[error("Province Code is not on file, please enter an existing Province Code.")]
    NotOnFile {
        /// Upper-cased code that was looked up.
        code: String,
    },
    /// The lookup could not be consulted.
    #[error("reference lookup unavailable: {0}")]
    Lookup(#[from] LookupError),
}

/// A province code that passed screening, with its owning country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenedProvince {
    /// Upper-cased province code.
    pub province_code: ProvinceCode,
    /// Country that owns the province.
    pub country_code: CountryCode,
}

/// Screens a province code as typed into an entry form.
///
/// The code must be ASCII letters only, exactly two of them, and on file once
/// upper-cased.
pub fn screen_province_code<L: ReferenceLookup + ?Sized>(
    code: &str,
    lookup: &L,
) -> Result<ScreenedProvince, ScreeningError> {
    let code = code.trim();
    if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ScreeningError::NotLetters);
    }
    if code.len() != 2 {
        return Err(ScreeningError::WrongLength { found: code.len() });
    }

    let province_code = ProvinceCode::parse(code).map_err(|_| ScreeningError::NotLetters)?;
    match lookup.resolve_country(province_code.as_ref())? {
        Some(country_code) => Ok(ScreenedProvince {
            province_code,
            country_code,
        }),
        None => Err(ScreeningError::NotOnFile {
            code: province_code.to_string(),
        }),
    }
}
