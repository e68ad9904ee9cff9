use std::sync::{Arc, PoisonError, RwLock};

use oec_canonical::CountryCode;
use oec_core::{LookupError, ReferenceLookup};
use tracing::debug;

use crate::table::ProvinceTable;

/// Shared handle to the current reference snapshot.
///
/// Readers take a clone of the current `Arc` and keep using it even if a new
/// snapshot is installed meanwhile, so a single validation never sees two
/// versions of the table. A handle with no snapshot reports
/// [`LookupError::Unavailable`].
#[derive(Debug, Default)]
pub struct SharedLookup {
    current: RwLock<Option<Arc<ProvinceTable>>>,
}

impl SharedLookup {
    /// Creates a handle with no snapshot loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a handle serving `table`.
    pub fn new(table: ProvinceTable) -> Self {
        Self {
            current: RwLock::new(Some(Arc::new(table))),
        }
    }

    /// Returns the current snapshot, if any.
    pub fn snapshot(&self) -> Option<Arc<ProvinceTable>> {
        // The guarded value is a single Arc, so a poisoned lock still holds a
        // whole snapshot.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Installs `table` and returns the snapshot it replaced.
    pub fn replace(&self, table: ProvinceTable) -> Option<Arc<ProvinceTable>> {
        let provinces = table.len();
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(Arc::new(table));
        debug!(provinces, replaced = previous.is_some(), "swapped reference snapshot");
        previous
    }

    /// Removes the current snapshot. Later lookups report unavailable.
    pub fn clear(&self) -> Option<Arc<ProvinceTable>> {
        let previous = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        debug!(cleared = previous.is_some(), "cleared reference snapshot");
        previous
    }
}

impl ReferenceLookup for SharedLookup {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        self.snapshot()
            .ok_or(LookupError::Unavailable)?
            .resolve_country(province_code)
    }
}
