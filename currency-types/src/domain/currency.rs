//! Currency codes and the filtered currency directory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Currencies the directory is narrowed to.
pub const ALLOWED_CURRENCIES: &[&str] = &["rub", "usd", "eur", "gbp"];

/// Lowercase currency identifier as used by the feed (`"usd"`, `"eur"`, ...).
///
/// Any input is lowercased on construction, so two codes that differ only in
/// case compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the code is in `allowed`.
    pub fn is_allowed(&self, allowed: &[&str]) -> bool {
        allowed.contains(&self.0.as_str())
    }
}

impl From<String> for CurrencyCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency code to display name, e.g. `"usd" => "US Dollar"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyDirectory(BTreeMap<CurrencyCode, String>);

impl CurrencyDirectory {
    pub fn new(entries: BTreeMap<CurrencyCode, String>) -> Self {
        Self(entries)
    }

    /// Keeps only the codes present in `allowed`, with their original names.
    pub fn filtered(self, allowed: &[&str]) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|(code, _)| code.is_allowed(allowed))
                .collect(),
        )
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(&CurrencyCode::new(code)).map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, &str)> {
        self.0.iter().map(|(code, name)| (code, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(CurrencyCode, String)> for CurrencyDirectory {
    fn from_iter<I: IntoIterator<Item = (CurrencyCode, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_is_lowercased() {
        assert_eq!(CurrencyCode::new("USD").as_str(), "usd");
        assert_eq!(CurrencyCode::from("Eur"), CurrencyCode::new("eur"));
    }

    #[test]
    fn test_code_deserializes_lowercase() {
        let code: CurrencyCode = serde_json::from_str(r#""GBP""#).unwrap();
        assert_eq!(code.to_string(), "gbp");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""gbp""#);
    }

    #[test]
    fn test_is_allowed() {
        assert!(CurrencyCode::new("RUB").is_allowed(ALLOWED_CURRENCIES));
        assert!(!CurrencyCode::new("jpy").is_allowed(ALLOWED_CURRENCIES));
    }

    #[test]
    fn test_directory_filtered_to_allow_list() {
        let directory: CurrencyDirectory = serde_json::from_str(
            r#"{"usd": "US Dollar", "jpy": "Japanese Yen", "eur": "Euro", "1inch": "1inch Network"}"#,
        )
        .unwrap();

        let filtered = directory.filtered(ALLOWED_CURRENCIES);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("usd"), Some("US Dollar"));
        assert_eq!(filtered.get("EUR"), Some("Euro"));
        assert_eq!(filtered.get("jpy"), None);
        assert!(filtered.codes().all(|c| c.is_allowed(ALLOWED_CURRENCIES)));
    }

    #[test]
    fn test_directory_filtered_with_nothing_allowed() {
        let directory: CurrencyDirectory =
            serde_json::from_str(r#"{"jpy": "Japanese Yen"}"#).unwrap();
        assert!(directory.filtered(ALLOWED_CURRENCIES).is_empty());
    }
}
