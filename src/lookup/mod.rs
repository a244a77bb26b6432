//! Country lookups against the remote API.
//!
//! [`CountryApi`] fetches records for a term, [`LookupExecutor`] moves that
//! work off the UI thread, and every request/response pair is tagged with a
//! sequence id so the controller can tell which lookup a response belongs to.

mod error;
mod executor;
mod http;

pub use error::LookupError;
pub use executor::{LookupExecutor, ThreadedExecutor};
pub use http::{CountryApi, DEFAULT_BASE_URL, HttpCountryApi};

use crate::country::Country;

/// A lookup scheduled by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
	pub id: u64,
	pub term: String,
}

/// Outcome of a lookup, tagged with the id of the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResponse {
	pub id: u64,
	pub term: String,
	pub outcome: Result<Vec<Country>, LookupError>,
}
