//! Output formatting utilities.

use oec_core::FieldError;
use oec_store::Province;

/// Prints the header for `validate` table output.
#[allow(clippy::print_literal)]
pub fn print_outcome_header() {
    println!("{:<8} {:<10} {}", "RECORD", "VERDICT", "DETAIL");
    println!("{}", "-".repeat(70));
}

/// Formats an accepted record as a table row.
pub fn format_accepted_row(index: usize, fingerprint: &str) -> String {
    format!("{:<8} {:<10} {}", index, "accepted", fingerprint)
}

/// Formats a rejected record as a table row followed by one line per error.
pub fn format_rejected_rows(index: usize, errors: &[FieldError]) -> String {
    let mut rows = format!("{:<8} {:<10} {} error(s)", index, "rejected", errors.len());
    for error in errors {
        let fields: Vec<_> = error.fields.iter().map(|f| f.label()).collect();
        rows.push_str(&format!(
            "\n{:<19} {} [{:?}] {}",
            "",
            fields.join(", "),
            error.kind,
            error.message
        ));
    }
    rows
}

/// Prints the header for `list` table output.
#[allow(clippy::print_literal)]
pub fn print_province_header() {
    println!("{:<6} {:<8} {}", "CODE", "COUNTRY", "NAME");
    println!("{}", "-".repeat(40));
}

/// Formats a province as a table row.
pub fn format_province_row(province: &Province) -> String {
    format!(
        "{:<6} {:<8} {}",
        province.province_code.as_ref(),
        province.country_code.as_ref(),
        truncate(&province.name, 40)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
