//! Exchange rate tables.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use super::CurrencyCode;

/// Units of the target currency bought by one unit of the base currency.
///
/// Kept in the textual form the feed published so no precision is lost;
/// the feed sends JSON numbers but strings are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExchangeRate(String);

impl ExchangeRate {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the rate as a float.
    pub fn to_f64(&self) -> Result<f64, std::num::ParseFloatError> {
        self.0.parse()
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ExchangeRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_f64() {
            Ok(value) if value.is_finite() => serializer.serialize_f64(value),
            _ => serializer.serialize_str(&self.0),
        }
    }
}

impl<'de> Deserialize<'de> for ExchangeRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RateVisitor;

        impl Visitor<'_> for RateVisitor {
            type Value = ExchangeRate;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal number or a numeric string")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(ExchangeRate(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ExchangeRate(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ExchangeRate(v.to_string()))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ExchangeRate(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ExchangeRate(v))
            }
        }

        deserializer.deserialize_any(RateVisitor)
    }
}

/// Target currency to rate, for one base currency.
pub type RateMap = BTreeMap<CurrencyCode, ExchangeRate>;

/// Snapshot of one base currency's rates, as served by `currencies/{code}.json`.
///
/// The feed document is a flat object: a `date` key next to one key per base
/// currency. The date and the rate maps are split into separate fields here.
///
/// ```
/// use currency_types::{CurrencyCode, ExchangeRateTable};
///
/// let table: ExchangeRateTable =
///     serde_json::from_str(r#"{"date":"2013-08-28","usd":{"rub":33.1224}}"#).unwrap();
/// assert_eq!(table.date, "2013-08-28");
/// let rub = table.rate(&CurrencyCode::new("usd"), &CurrencyCode::new("rub"));
/// assert_eq!(rub.unwrap().unwrap().as_str(), "33.1224");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateTable {
    pub date: String,
    #[serde(flatten)]
    rates: BTreeMap<CurrencyCode, RateMap>,
}

impl ExchangeRateTable {
    pub fn new(date: impl Into<String>, base: CurrencyCode, rates: RateMap) -> Self {
        Self {
            date: date.into(),
            rates: BTreeMap::from([(base, rates)]),
        }
    }

    /// Base currencies present in the table.
    pub fn bases(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    /// The rate map published for `base`.
    pub fn rates_for(&self, base: &CurrencyCode) -> Option<&RateMap> {
        self.rates.get(base)
    }

    /// Looks up `base -> target`.
    ///
    /// The outer `None` means the table has no map for `base`; the inner
    /// `None` means `base` is present but does not quote `target`.
    pub fn rate(&self, base: &CurrencyCode, target: &CurrencyCode) -> Option<Option<&ExchangeRate>> {
        self.rates_for(base).map(|rates| rates.get(target))
    }
}
