use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a lookup does when the search term is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyTermPolicy {
	/// Enter `Loading` and stay there without issuing a request. This is the
	/// long-standing behavior and remains the default until the desired
	/// empty-term result is decided.
	#[default]
	StayLoading,
	/// Return to `Idle` without issuing a request.
	Idle,
}

/// Which lookup responses may update the visible state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
	/// Only the response to the most recently issued lookup is applied.
	#[default]
	LatestOnly,
	/// Every response is applied in arrival order, so a slow stale lookup
	/// can overwrite a newer one.
	LastArrival,
}

/// Behavior switches for a [`Controller`](super::Controller).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerOptions {
	pub empty_term: EmptyTermPolicy,
	pub responses: ResponseOrdering,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseOptionError {
	kind: &'static str,
	value: String,
	expected: &'static str,
}

impl EmptyTermPolicy {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::StayLoading => "stay-loading",
			Self::Idle => "idle",
		}
	}
}

impl ResponseOrdering {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::LatestOnly => "latest-only",
			Self::LastArrival => "last-arrival",
		}
	}
}

impl FromStr for EmptyTermPolicy {
	type Err = ParseOptionError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"stay-loading" => Ok(Self::StayLoading),
			"idle" => Ok(Self::Idle),
			_ => Err(ParseOptionError {
				kind: "empty-term policy",
				value: value.to_string(),
				expected: "stay-loading, idle",
			}),
		}
	}
}

impl FromStr for ResponseOrdering {
	type Err = ParseOptionError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"latest-only" => Ok(Self::LatestOnly),
			"last-arrival" => Ok(Self::LastArrival),
			_ => Err(ParseOptionError {
				kind: "response ordering",
				value: value.to_string(),
				expected: "latest-only, last-arrival",
			}),
		}
	}
}

impl fmt::Display for EmptyTermPolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl fmt::Display for ResponseOrdering {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
