//! Command implementations.

pub mod list;
pub mod normalize;
pub mod province;
pub mod validate;

use oec_store::ProvinceTable;

/// Loads the reference file named on the command line.
fn load_reference(path: &str) -> Result<ProvinceTable, Box<dyn std::error::Error>> {
    ProvinceTable::load(path)
        .map_err(|e| format!("Failed to load reference data {}: {}", path, e).into())
}
