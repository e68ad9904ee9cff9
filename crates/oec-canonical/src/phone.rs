use crate::validation::NormalizeError;

const PHONE_DIGITS: usize = 10;

/// Extracts the digits of a free-form phone number and formats them as
/// `###-###-####`.
///
/// Any non-digit noise is tolerated as long as exactly ten digits remain.
/// Blank input is accepted unchanged.
pub fn normalize_phone(input: &str) -> Result<String, NormalizeError> {
    if input.trim().is_empty() {
        return Ok(input.to_string());
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != PHONE_DIGITS {
        return Err(NormalizeError::WrongLength {
            field: "phone number",
            found: digits.len(),
            expected: "10",
        });
    }

    Ok(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}
