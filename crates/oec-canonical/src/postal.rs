use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::identifiers::CountryCode;
use crate::validation::NormalizeError;

/// Canadian postal code over the upper-cased, stripped candidate.
///
/// First letter: no D F I O Q U W Z. Later letters: no D F I O Q U.
static CANADIAN_POSTAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ABCEGHJ-NPRSTVXY][0-9][ABCEGHJ-NPRSTV-Z][0-9][ABCEGHJ-NPRSTV-Z][0-9]$")
        .expect("invalid postal code regex")
});

static ZIP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:[0-9]{4})?$").expect("invalid zip code regex"));

/// Validates and canonicalizes a Canadian postal code.
///
/// Every character that is not a letter or digit is discarded before the
/// length check, so `"a1b-2c3"` and `"A1B  2C3"` both become `"A1B 2C3"`
/// while `"A1B2C3X"` is rejected. Empty input is accepted unchanged.
pub fn normalize_postal(input: &str) -> Result<String, NormalizeError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let candidate: String = input.chars().filter(|c| c.is_alphanumeric()).collect();
    let found = candidate.chars().count();
    if found != 6 {
        return Err(NormalizeError::WrongLength {
            field: "postal code",
            found,
            expected: "6",
        });
    }

    let upper = candidate.to_ascii_uppercase();
    if !CANADIAN_POSTAL_REGEX.is_match(&upper) {
        return Err(NormalizeError::PatternMismatch {
            field: "postal code",
            value: candidate,
            pattern: PostalFormat::Canadian.expected_pattern(),
        });
    }

    // Six ASCII characters, so byte index 3 is a char boundary.
    let (head, tail) = upper.split_at(3);
    Ok(format!("{head} {tail}"))
}

/// Validates and canonicalizes a US ZIP or ZIP+4 code.
///
/// Digits are collected in encounter order and every other character is
/// dropped, so `"12-345"` becomes `"12345"` and `"12345and6789"` becomes
/// `"12345-6789"`. Leading zeros are kept. Empty input is accepted unchanged.
pub fn normalize_zip(input: &str) -> Result<String, NormalizeError> {
    if input.is_empty() {
        return Ok(String::new());
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 5 && digits.len() != 9 {
        return Err(NormalizeError::WrongLength {
            field: "zip code",
            found: digits.len(),
            expected: "5 or 9",
        });
    }

    if !ZIP_REGEX.is_match(&digits) {
        return Err(NormalizeError::PatternMismatch {
            field: "zip code",
            value: digits,
            pattern: PostalFormat::UnitedStates.expected_pattern(),
        });
    }

    if digits.len() == 5 {
        Ok(digits)
    } else {
        Ok(format!("{}-{}", &digits[..5], &digits[5..]))
    }
}

/// Postal-format rule selected by the country that owns a province/state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostalFormat {
    /// Canada Post `A1A 1A1`.
    Canadian,
    /// USPS `12345` or `12345-6789`.
    UnitedStates,
}

impl PostalFormat {
    /// Returns the rule for a country, or `None` when no postal format is enforced.
    pub fn for_country(country: &CountryCode) -> Option<Self> {
        match country.as_ref() {
            "CA" => Some(Self::Canadian),
            "US" => Some(Self::UnitedStates),
            _ => None,
        }
    }

    /// Normalizes a value under this rule.
    pub fn normalize(self, input: &str) -> Result<String, NormalizeError> {
        match self {
            Self::Canadian => normalize_postal(input),
            Self::UnitedStates => normalize_zip(input),
        }
    }

    /// Example of the accepted shapes, for error messages.
    pub fn expected_pattern(self) -> &'static str {
        match self {
            Self::Canadian => "A6A 6A6 or A6A6A6",
            Self::UnitedStates => "12345 or 12345-1234",
        }
    }

    /// Country label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Canadian => "Canadian",
            Self::UnitedStates => "US",
        }
    }
}
