//! Reference data for OEC farm validation.
//!
//! This crate provides:
//! - `ReferenceData`, the JSON file of countries and provinces
//! - `ProvinceTable`, a checked, immutable snapshot that implements
//!   [`oec_core::ReferenceLookup`]
//! - `SharedLookup`, a swappable handle for long-running callers
//!
//! ## Quick Start
//!
//! ```rust
//! use oec_core::ReferenceLookup;
//! use oec_store::ProvinceTable;
//!
//! let table = ProvinceTable::from_json_str(r#"{
//!     "countries": [{ "country_code": "CA", "name": "Canada" }],
//!     "provinces": [{ "province_code": "ON", "name": "Ontario", "country_code": "CA" }]
//! }"#)?;
//!
//! let country = table.resolve_country("ON")?;
//! assert_eq!(country.unwrap().as_ref(), "CA");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Error types for reference data.
pub mod error;
/// Reference data file model.
pub mod reference;
/// Swappable reference snapshots.
pub mod shared;
/// Checked province table.
pub mod table;

pub use error::StoreError;
pub use reference::{Country, Province, ReferenceData};
pub use shared::SharedLookup;
pub use table::ProvinceTable;
