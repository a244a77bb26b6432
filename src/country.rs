//! Country records as returned by the REST Countries `v3.1/name` endpoint.
//!
//! Only the fields rendered on a card are modeled; everything else in the
//! payload is ignored during deserialization. The accessors return the
//! display text for each card line, with absent fields rendered blank.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name block of a country record. Only the common name is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
	pub common: String,
}

/// Metadata attached to a currency code. Never displayed, only carried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
	pub name: Option<String>,
	pub symbol: Option<String>,
}

/// A single country as parsed from a lookup response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
	pub name: CountryName,
	#[serde(default)]
	pub flag: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub capital: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub continents: Option<Vec<String>>,
	/// Keyed by currency code, kept in response order.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub currencies: Option<IndexMap<String, Currency>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub population: Option<u64>,
}

impl Country {
	/// Build a record with only a name and flag set.
	#[must_use]
	pub fn named(common: impl Into<String>, flag: impl Into<String>) -> Self {
		Self {
			name: CountryName {
				common: common.into(),
			},
			flag: flag.into(),
			capital: None,
			continents: None,
			currencies: None,
			population: None,
		}
	}

	/// Common name followed by the flag glyph.
	#[must_use]
	pub fn title(&self) -> String {
		format!("{} {}", self.name.common, self.flag)
	}

	/// First listed capital, blank when the country has none.
	#[must_use]
	pub fn capital_text(&self) -> &str {
		self.capital
			.as_ref()
			.and_then(|capitals| capitals.first())
			.map(String::as_str)
			.unwrap_or("")
	}

	#[must_use]
	pub fn continents_text(&self) -> String {
		self.continents
			.as_ref()
			.map(|continents| continents.join(", "))
			.unwrap_or_default()
	}

	/// Currency codes joined in response order.
	#[must_use]
	pub fn currencies_text(&self) -> String {
		self.currencies
			.as_ref()
			.map(|currencies| {
				currencies
					.keys()
					.map(String::as_str)
					.collect::<Vec<_>>()
					.join(", ")
			})
			.unwrap_or_default()
	}

	#[must_use]
	pub fn population_text(&self) -> String {
		self.population.map(group_digits).unwrap_or_default()
	}
}

/// Format an integer with comma digit grouping, e.g. `83240525` as
/// `83,240,525`.
#[must_use]
pub fn group_digits(value: u64) -> String {
	let digits = value.to_string();
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (index, ch) in digits.chars().enumerate() {
		if index > 0 && (digits.len() - index) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

#[cfg(test)]
mod tests {
	use super::*;

	const GERMANY: &str = r#"{
		"name": {"common": "Germany", "official": "Federal Republic of Germany"},
		"flag": "🇩🇪",
		"capital": ["Berlin"],
		"continents": ["Europe"],
		"currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
		"population": 83240525,
		"area": 357114.0
	}"#;

	#[test]
	fn parses_record_and_ignores_unknown_fields() {
		let country: Country = serde_json::from_str(GERMANY).expect("parse");
		assert_eq!(country.name.common, "Germany");
		assert_eq!(country.title(), "Germany 🇩🇪");
		assert_eq!(country.capital_text(), "Berlin");
		assert_eq!(country.continents_text(), "Europe");
		assert_eq!(country.currencies_text(), "EUR");
		assert_eq!(country.population_text(), "83,240,525");
	}

	#[test]
	fn missing_optional_fields_render_blank() {
		let country: Country =
			serde_json::from_str(r#"{"name": {"common": "Antarctica"}, "flag": "🇦🇶"}"#)
				.expect("parse");
		assert_eq!(country.capital_text(), "");
		assert_eq!(country.continents_text(), "");
		assert_eq!(country.currencies_text(), "");
		assert_eq!(country.population_text(), "");
	}

	#[test]
	fn first_capital_is_used_and_currency_keys_keep_response_order() {
		let json = r#"{
			"name": {"common": "South Africa"},
			"flag": "🇿🇦",
			"capital": ["Pretoria", "Bloemfontein", "Cape Town"],
			"continents": ["Africa"],
			"currencies": {"ZAR": {"name": "South African rand"}, "BWP": {}, "LSL": {}}
		}"#;
		let country: Country = serde_json::from_str(json).expect("parse");
		assert_eq!(country.capital_text(), "Pretoria");
		assert_eq!(country.currencies_text(), "ZAR, BWP, LSL");
	}

	#[test]
	fn empty_currency_map_renders_blank() {
		let mut country = Country::named("Nowhere", "");
		country.currencies = Some(IndexMap::new());
		assert_eq!(country.currencies_text(), "");
	}

	#[test]
	fn digit_grouping() {
		assert_eq!(group_digits(0), "0");
		assert_eq!(group_digits(999), "999");
		assert_eq!(group_digits(1_000), "1,000");
		assert_eq!(group_digits(12_345_678), "12,345,678");
		assert_eq!(group_digits(100_000), "100,000");
	}
}
