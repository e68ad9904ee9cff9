//! Validate command implementation.

use chrono::{Local, NaiveDate, NaiveDateTime};
use oec_core::{FarmRecordValidator, RawFarmInput, ValidationOutcome};
use serde_json::{json, Value};
use tracing::info;

use crate::commands::load_reference;
use crate::output;

pub fn run(
    input: String,
    reference: String,
    json_output: bool,
    strict: bool,
    as_of: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = match as_of {
        Some(s) => parse_as_of(&s)?,
        None => Local::now().naive_local(),
    };

    let table = load_reference(&reference)?;
    let validator = FarmRecordValidator::new(&table);
    let records = read_records(&input)?;

    let mut results = Vec::with_capacity(records.len());
    for record in &records {
        let outcome = validator.validate_at(record, now)?;
        let fingerprint = match outcome.record() {
            Some(normalized) => Some(normalized.fingerprint()?.b64),
            None => None,
        };
        results.push((outcome, fingerprint));
    }

    let rejected = results.iter().filter(|(o, _)| !o.is_accepted()).count();
    info!(records = results.len(), rejected, "validated farm records");

    if json_output {
        let json_results: Vec<_> = results
            .iter()
            .enumerate()
            .map(|(index, (outcome, fingerprint))| match outcome {
                ValidationOutcome::Accepted(record) => json!({
                    "record": index,
                    "verdict": "accepted",
                    "fingerprint": fingerprint,
                    "normalized": record,
                }),
                ValidationOutcome::Rejected(errors) => json!({
                    "record": index,
                    "verdict": "rejected",
                    "errors": errors,
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        output::print_outcome_header();
        for (index, (outcome, fingerprint)) in results.iter().enumerate() {
            match (outcome, fingerprint) {
                (ValidationOutcome::Accepted(_), Some(fingerprint)) => {
                    println!("{}", output::format_accepted_row(index, fingerprint))
                }
                _ => println!("{}", output::format_rejected_rows(index, outcome.errors())),
            }
        }
    }

    if strict && rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Reads a single record or an array of records.
fn read_records(path: &str) -> Result<Vec<RawFarmInput>, Box<dyn std::error::Error>> {
    let json_str = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read file {}: {}", path, e))?;
    let value: Value =
        serde_json::from_str(&json_str).map_err(|e| format!("Invalid JSON: {}", e))?;

    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| -> Box<dyn std::error::Error> {
                    format!("Invalid farm record {}: {}", index, e).into()
                })
            })
            .collect(),
        single => Ok(vec![serde_json::from_value(single)
            .map_err(|e| format!("Invalid farm record: {}", e))?]),
    }
}

fn parse_as_of(s: &str) -> Result<NaiveDateTime, Box<dyn std::error::Error>> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("Invalid --as-of {}: {}", s, e))?;
    // A bare date means the last instant of that day.
    date.and_hms_nano_opt(23, 59, 59, 999_999_999)
        .ok_or_else(|| format!("Invalid --as-of {}", s).into())
}
