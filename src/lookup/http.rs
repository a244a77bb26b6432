//! Blocking HTTP client for the REST Countries name endpoint.

use anyhow::{Context, Result, ensure};
use reqwest::Url;
use reqwest::blocking::Client;

use super::LookupError;
use crate::country::Country;

/// Public REST Countries host used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com";

/// Source of country records for a search term.
pub trait CountryApi: Send + Sync {
	/// Look up every country whose name matches `term`.
	fn search(&self, term: &str) -> Result<Vec<Country>, LookupError>;
}

/// [`CountryApi`] backed by `GET {base}/v3.1/name/{term}`.
#[derive(Debug, Clone)]
pub struct HttpCountryApi {
	client: Client,
	base_url: Url,
}

impl HttpCountryApi {
	/// Build a client rooted at `base_url`.
	///
	/// Requests carry no timeout; a lookup resolves only when the server
	/// answers or the connection fails.
	pub fn new(base_url: &str) -> Result<Self> {
		let base_url = Url::parse(base_url)
			.with_context(|| format!("invalid API base URL `{base_url}`"))?;
		ensure!(
			!base_url.cannot_be_a_base(),
			"API base URL `{base_url}` cannot carry a path"
		);
		let client = Client::builder()
			.timeout(None)
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self { client, base_url })
	}

	#[must_use]
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Endpoint for `term`, percent-encoded as a single path segment.
	#[must_use]
	pub fn endpoint(&self, term: &str) -> Url {
		let mut url = self.base_url.clone();
		if let Ok(mut segments) = url.path_segments_mut() {
			segments.pop_if_empty().extend(["v3.1", "name", term]);
		}
		url
	}
}

impl CountryApi for HttpCountryApi {
	fn search(&self, term: &str) -> Result<Vec<Country>, LookupError> {
		let url = self.endpoint(term);
		tracing::debug!(%url, "requesting countries");

		let response = self
			.client
			.get(url)
			.send()
			.map_err(|err| LookupError::Transport(err.to_string()))?;

		let status = response.status();
		if !status.is_success() {
			return Err(LookupError::Status(status.as_u16()));
		}

		response
			.json::<Vec<Country>>()
			.map_err(|err| LookupError::Decode(err.to_string()))
	}
}
