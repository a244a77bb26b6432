//! The application controller: search term, result state, and lookups.
//!
//! A [`Controller`] owns the only mutable state in the application. Term
//! changes schedule lookups, lookup responses are drained with
//! [`Controller::pump`], and [`Controller::view`] derives what should be drawn.
//! Nothing here touches the terminal, so several controllers can coexist.

mod options;
mod runtime;
mod state;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::mpsc::TryRecvError;

pub use options::{ControllerOptions, EmptyTermPolicy, ParseOptionError, ResponseOrdering};
pub use state::{Action, ResultState};

use runtime::LookupRuntime;

use crate::lookup::{LookupExecutor, LookupResponse};
use crate::view::View;

pub struct Controller {
	term: String,
	state: ResultState,
	options: ControllerOptions,
	lookups: LookupRuntime,
	mounted: bool,
}

impl Controller {
	/// Create an idle controller with an empty term.
	pub fn new(executor: Box<dyn LookupExecutor>, options: ControllerOptions) -> Self {
		Self {
			term: String::new(),
			state: ResultState::Idle,
			options,
			lookups: LookupRuntime::new(executor),
			mounted: false,
		}
	}

	/// Seed the term shown before the first lookup runs.
	#[must_use]
	pub fn with_initial_term(mut self, term: impl Into<String>) -> Self {
		self.term = term.into();
		self
	}

	pub fn term(&self) -> &str {
		&self.term
	}

	pub fn state(&self) -> &ResultState {
		&self.state
	}

	pub fn options(&self) -> ControllerOptions {
		self.options
	}

	/// Number of lookup procedures that reached the network.
	pub fn lookups_issued(&self) -> u64 {
		self.lookups.issued()
	}

	pub fn is_in_flight(&self) -> bool {
		self.lookups.is_in_flight()
	}

	/// Run the lookup for the initial term. Later calls do nothing.
	pub fn mount(&mut self) {
		if self.mounted {
			return;
		}
		self.mounted = true;
		self.lookup();
	}

	/// Replace the search term, scheduling a lookup when it actually changed.
	///
	/// Returns `true` when the term changed.
	pub fn set_term(&mut self, value: impl Into<String>) -> bool {
		let value = value.into();
		if value == self.term {
			return false;
		}
		self.term = value;
		if self.mounted {
			self.lookup();
		}
		true
	}

	fn lookup(&mut self) {
		self.state.dispatch(Action::Loading);

		if self.term.is_empty() {
			if self.options.responses == ResponseOrdering::LatestOnly {
				self.lookups.invalidate();
			}
			match self.options.empty_term {
				EmptyTermPolicy::StayLoading => {
					tracing::debug!("empty search term, no lookup issued");
				}
				EmptyTermPolicy::Idle => self.state.dispatch(Action::Reset),
			}
			return;
		}

		let id = self.lookups.issue(self.term.clone());
		tracing::debug!(id, term = %self.term, "lookup issued");
	}

	/// Apply every response that has arrived since the last call.
	///
	/// Returns the number of responses that changed the visible state.
	pub fn pump(&mut self) -> usize {
		let mut applied = 0;
		loop {
			match self.lookups.try_recv() {
				Ok(response) => {
					if self.apply(response) {
						applied += 1;
					}
				}
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
		applied
	}

	/// Apply a single response, subject to the response ordering policy.
	///
	/// Returns `false` when the response was discarded as stale.
	pub fn apply(&mut self, response: LookupResponse) -> bool {
		let LookupResponse { id, term, outcome } = response;
		let current = self.lookups.matches_latest(id);

		if !current && self.options.responses == ResponseOrdering::LatestOnly {
			tracing::debug!(id, %term, "discarding stale lookup response");
			return false;
		}
		self.lookups.record_completion(id);

		match outcome {
			Ok(records) => {
				tracing::info!(id, %term, count = records.len(), "lookup completed");
				self.state.dispatch(Action::Loaded(records));
			}
			Err(err) => {
				tracing::warn!(id, %term, error = ?err, "lookup failed");
				self.state.dispatch(Action::Failed(err.user_message()));
			}
		}
		true
	}

	/// Pure snapshot of what should be drawn for the current term and state.
	pub fn view(&self) -> View {
		View::build(&self.term, &self.state)
	}
}
