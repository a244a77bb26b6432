use thiserror::Error;

/// Failure of a single country lookup.
///
/// The display text is exactly what the UI shows: a non-success status is
/// reported as the fixed word `Error`, while transport and decoding failures
/// surface the underlying message unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// The endpoint answered with a non-success status. The code is only
	/// kept for logging.
	#[error("Error")]
	Status(u16),
	#[error("{0}")]
	Transport(String),
	#[error("{0}")]
	Decode(String),
}

impl LookupError {
	/// Text shown to the user for this failure.
	#[must_use]
	pub fn user_message(&self) -> String {
		self.to_string()
	}
}
