//! Country to currency bindings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One country's currency binding, as published in `country.json`.
///
/// All fields are kept as the feed sends them; numeric codes are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country_name: String,
    pub country_iso3: String,
    pub country_iso_numeric: String,
    pub currency_name: String,
    pub currency_code: String,
    pub currency_number: String,
}

/// Lowercase two-letter country key to [`CountryRecord`].
///
/// Keys are lowercased when the directory is built, whatever the feed sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, CountryRecord>")]
pub struct CountryDirectory(BTreeMap<String, CountryRecord>);

impl CountryDirectory {
    pub fn get(&self, country_key: &str) -> Option<&CountryRecord> {
        self.0.get(&country_key.to_lowercase())
    }

    /// Consumes the directory and returns the record for `country_key`.
    pub fn remove(mut self, country_key: &str) -> Option<CountryRecord> {
        self.0.remove(&country_key.to_lowercase())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CountryRecord)> {
        self.0.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, CountryRecord>> for CountryDirectory {
    fn from(entries: BTreeMap<String, CountryRecord>) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(String, CountryRecord)> for CountryDirectory {
    fn from_iter<I: IntoIterator<Item = (String, CountryRecord)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, record)| (key.to_lowercase(), record))
                .collect(),
        )
    }
}

/// Derives the country key from a language tag such as `"ru-RU"`.
///
/// The key is the lowercased text after the last hyphen. Tags without a
/// hyphen, or with nothing after it, yield `None`.
pub fn country_key_from_language(language: &str) -> Option<String> {
    let (_, region) = language.rsplit_once('-')?;
    let region = region.trim();
    if region.is_empty() {
        return None;
    }
    Some(region.to_lowercase())
}
