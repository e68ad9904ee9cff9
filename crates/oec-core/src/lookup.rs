use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use oec_canonical::CountryCode;
use thiserror::Error;

/// Error returned when the lookup itself cannot answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No reference data has been loaded.
    #[error("reference data is not loaded")]
    Unavailable,
}

/// Read-only mapping from province/state code to owning country.
///
/// `Ok(None)` means the code is not on file. `Err` means the lookup could not
/// be consulted and is treated as a configuration fault.
pub trait ReferenceLookup {
    /// Resolves the country that owns `province_code`.
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError>;
}

impl<T: ReferenceLookup + ?Sized> ReferenceLookup for &T {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        (**self).resolve_country(province_code)
    }
}

impl<T: ReferenceLookup + ?Sized> ReferenceLookup for Arc<T> {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        (**self).resolve_country(province_code)
    }
}

impl ReferenceLookup for BTreeMap<String, CountryCode> {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        Ok(self.get(province_code).cloned())
    }
}

impl ReferenceLookup for HashMap<String, CountryCode> {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        Ok(self.get(province_code).cloned())
    }
}
