//! Domain types for the currency feed.

mod country;
mod currency;
mod rate;

pub use country::{CountryDirectory, CountryRecord, country_key_from_language};
pub use currency::{ALLOWED_CURRENCIES, CurrencyCode, CurrencyDirectory};
pub use rate::{ExchangeRate, ExchangeRateTable, RateMap};
