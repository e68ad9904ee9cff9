use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use oec_canonical::CountryCode;
use oec_core::{LookupError, ReferenceLookup};
use tracing::info;

use crate::error::StoreError;
use crate::reference::{Country, Province, ReferenceData};

/// Immutable, cross-checked province and country table.
///
/// Every province references a country in the table and no code appears
/// twice. Lookups are exact matches on the stored upper-case codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvinceTable {
    countries: BTreeMap<String, Country>,
    provinces: BTreeMap<String, Province>,
}

impl ProvinceTable {
    /// Builds a table from parsed reference data.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if:
    /// - A country or province code appears twice
    /// - A province references a country that is not listed
    pub fn from_data(data: ReferenceData) -> Result<Self, StoreError> {
        let mut countries = BTreeMap::new();
        for country in data.countries {
            let code = country.country_code.to_string();
            if countries.contains_key(&code) {
                return Err(StoreError::DuplicateCountry(code));
            }
            countries.insert(code, country);
        }

        let mut provinces = BTreeMap::new();
        for province in data.provinces {
            let code = province.province_code.to_string();
            if provinces.contains_key(&code) {
                return Err(StoreError::DuplicateProvince(code));
            }
            if !countries.contains_key(province.country_code.as_ref()) {
                return Err(StoreError::UnknownCountry {
                    province: code,
                    country: province.country_code.to_string(),
                });
            }
            provinces.insert(code, province);
        }

        Ok(Self {
            countries,
            provinces,
        })
    }

    /// Parses and checks reference data from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        Self::from_data(serde_json::from_str(json)?)
    }

    /// Parses and checks reference data from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        Self::from_data(serde_json::from_reader(reader)?)
    }

    /// Loads a reference data file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use oec_store::ProvinceTable;
    ///
    /// let table = ProvinceTable::load("reference.json")?;
    /// println!("{} provinces on file", table.len());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let table = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            countries = table.countries.len(),
            provinces = table.provinces.len(),
            "loaded reference data"
        );
        Ok(table)
    }

    /// Returns the province with exactly this code.
    pub fn province(&self, code: &str) -> Option<&Province> {
        self.provinces.get(code)
    }

    /// Returns the country with exactly this code.
    pub fn country(&self, code: &str) -> Option<&Country> {
        self.countries.get(code)
    }

    /// Iterates provinces in code order.
    pub fn provinces(&self) -> impl Iterator<Item = &Province> {
        self.provinces.values()
    }

    /// Iterates countries in code order.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// Number of provinces on file.
    pub fn len(&self) -> usize {
        self.provinces.len()
    }

    /// Returns true if no provinces are on file.
    pub fn is_empty(&self) -> bool {
        self.provinces.is_empty()
    }
}

impl ReferenceLookup for ProvinceTable {
    fn resolve_country(&self, province_code: &str) -> Result<Option<CountryCode>, LookupError> {
        Ok(self
            .province(province_code)
            .map(|province| province.country_code.clone()))
    }
}
