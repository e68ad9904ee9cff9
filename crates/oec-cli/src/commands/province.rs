//! Province command implementation.

use oec_core::screen_province_code;

use crate::commands::load_reference;

pub fn run(code: String, reference: String) -> Result<(), Box<dyn std::error::Error>> {
    let table = load_reference(&reference)?;
    let screened = screen_province_code(&code, &table)?;

    let name = table
        .province(screened.province_code.as_ref())
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    println!(
        "{} {} {}",
        screened.province_code, screened.country_code, name
    );
    Ok(())
}
