//! Normalize command implementation.

use std::io::{self, Read};

use clap::ValueEnum;
use oec_canonical::{normalize_phone, normalize_postal, normalize_title_case, normalize_zip};

/// Field normalizer to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    /// Title-case text (name, address, town, county).
    Title,
    /// Canadian postal code.
    Postal,
    /// US ZIP or ZIP+4 code.
    Zip,
    /// Ten-digit phone number.
    Phone,
}

pub fn run(kind: Kind, value: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let value = match value {
        Some(value) => value,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer.trim_end_matches(['\n', '\r']).to_string()
        }
    };

    let normalized = match kind {
        Kind::Title => normalize_title_case(&value),
        Kind::Postal => normalize_postal(&value)?,
        Kind::Zip => normalize_zip(&value)?,
        Kind::Phone => normalize_phone(&value)?,
    };

    println!("{}", normalized);
    Ok(())
}
