//! List command implementation.

use crate::commands::load_reference;
use crate::output;

pub fn run(reference: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_reference(&reference)?;

    if !json {
        output::print_province_header();
    }

    for province in table.provinces() {
        if json {
            println!("{}", serde_json::to_string(province)?);
        } else {
            println!("{}", output::format_province_row(province));
        }
    }

    Ok(())
}
