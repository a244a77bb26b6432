//! Pure view model derived from the controller's term and result state.
//!
//! Rendering code consumes a [`View`] and nothing else, so the drawn output
//! is always a function of `(term, state)`.

use crate::controller::ResultState;
use crate::country::Country;

/// Text shown in place of the card grid when there is nothing to list.
pub const EMPTY_PLACEHOLDER: &str = "No countries found";

/// Display text for one country card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCard {
	pub title: String,
	pub capital: String,
	pub continents: String,
	pub currencies: String,
	pub population: String,
}

impl CountryCard {
	/// Labeled detail lines in display order.
	#[must_use]
	pub fn details(&self) -> [(&'static str, &str); 4] {
		[
			("Capital", self.capital.as_str()),
			("Continents", self.continents.as_str()),
			("Currencies", self.currencies.as_str()),
			("Population", self.population.as_str()),
		]
	}
}

impl From<&Country> for CountryCard {
	fn from(country: &Country) -> Self {
		Self {
			title: country.title(),
			capital: country.capital_text().to_string(),
			continents: country.continents_text(),
			currencies: country.currencies_text(),
			population: country.population_text(),
		}
	}
}

/// Rendered form of a sequence of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultList {
	Empty,
	Cards(Vec<CountryCard>),
}

impl ResultList {
	/// One card per record, in order. Absent or empty input yields the
	/// placeholder. Records sharing a name are all kept.
	#[must_use]
	pub fn from_records(records: Option<&[Country]>) -> Self {
		match records {
			Some(records) if !records.is_empty() => {
				Self::Cards(records.iter().map(CountryCard::from).collect())
			}
			_ => Self::Empty,
		}
	}

	#[must_use]
	pub fn cards(&self) -> &[CountryCard] {
		match self {
			Self::Empty => &[],
			Self::Cards(cards) => cards,
		}
	}
}

/// Main content below the search row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
	Loading,
	Results(ResultList),
}

impl Body {
	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
	pub term: String,
	/// Error line, shown independently of the body.
	pub error: Option<String>,
	pub body: Body,
}

impl View {
	#[must_use]
	pub fn build(term: &str, state: &ResultState) -> Self {
		let body = if state.is_loading() {
			Body::Loading
		} else {
			Body::Results(ResultList::from_records(Some(state.records())))
		};

		Self {
			term: term.to_string(),
			error: state.error().map(str::to_string),
			body,
		}
	}

	/// Number of cards that would be drawn.
	#[must_use]
	pub fn card_count(&self) -> usize {
		match &self.body {
			Body::Loading => 0,
			Body::Results(list) => list.cards().len(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn country(name: &str) -> Country {
		Country::named(name, "🏳")
	}

	#[test]
	fn absent_or_empty_records_show_placeholder() {
		assert_eq!(ResultList::from_records(None), ResultList::Empty);
		assert_eq!(ResultList::from_records(Some(&[])), ResultList::Empty);
	}

	#[test]
	fn one_card_per_record_in_order() {
		let records = vec![country("Mali"), country("Malta"), country("Malawi")];
		let list = ResultList::from_records(Some(&records));
		let titles: Vec<_> = list.cards().iter().map(|card| card.title.as_str()).collect();
		assert_eq!(titles, ["Mali 🏳", "Malta 🏳", "Malawi 🏳"]);
	}

	#[test]
	fn duplicate_names_are_not_collapsed() {
		let records = vec![country("Congo"), country("Congo")];
		assert_eq!(ResultList::from_records(Some(&records)).cards().len(), 2);
	}

	#[test]
	fn card_details_follow_display_order() {
		let mut record = country("Japan");
		record.capital = Some(vec!["Tokyo".into()]);
		record.population = Some(125_836_021);
		let card = CountryCard::from(&record);
		let labels: Vec<_> = card.details().iter().map(|(label, _)| *label).collect();
		assert_eq!(labels, ["Capital", "Continents", "Currencies", "Population"]);
		assert_eq!(card.details()[0].1, "Tokyo");
		assert_eq!(card.details()[3].1, "125,836,021");
	}

	#[test]
	fn loading_replaces_the_list() {
		let view = View::build("fr", &ResultState::Loading);
		assert!(view.body.is_loading());
		assert_eq!(view.error, None);
		assert_eq!(view.card_count(), 0);
	}

	#[test]
	fn error_shows_message_and_placeholder() {
		let view = View::build("zz", &ResultState::Errored("Error".into()));
		assert_eq!(view.error.as_deref(), Some("Error"));
		assert_eq!(view.body, Body::Results(ResultList::Empty));
	}

	#[test]
	fn idle_and_empty_loaded_show_placeholder() {
		for state in [ResultState::Idle, ResultState::Loaded(Vec::new())] {
			let view = View::build("", &state);
			assert_eq!(view.body, Body::Results(ResultList::Empty));
		}
	}

	#[test]
	fn loaded_records_become_cards() {
		let state = ResultState::Loaded(vec![country("Fiji"), country("Finland")]);
		let view = View::build("fi", &state);
		assert_eq!(view.term, "fi");
		assert_eq!(view.card_count(), 2);
	}
}
