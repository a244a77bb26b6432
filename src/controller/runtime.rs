//! Sequencing for lookups dispatched to a [`LookupExecutor`].
//!
//! Every issued lookup receives a fresh id. The runtime remembers the newest
//! id so the controller can tell whether a response is current.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::lookup::{LookupExecutor, LookupRequest, LookupResponse};

pub(crate) struct LookupRuntime {
	executor: Box<dyn LookupExecutor>,
	tx: Sender<LookupResponse>,
	rx: Receiver<LookupResponse>,
	next_id: u64,
	current_id: Option<u64>,
	in_flight: bool,
}

impl LookupRuntime {
	pub(crate) fn new(executor: Box<dyn LookupExecutor>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			executor,
			tx,
			rx,
			next_id: 0,
			current_id: None,
			in_flight: false,
		}
	}

	/// Dispatch a lookup for `term` and return its id.
	pub(crate) fn issue(&mut self, term: String) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.current_id = Some(id);
		self.in_flight = true;
		self.executor
			.execute(LookupRequest { id, term }, self.tx.clone());
		id
	}

	/// Forget the current lookup so none of the outstanding responses match.
	pub(crate) fn invalidate(&mut self) {
		self.current_id = None;
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, id: u64) -> bool {
		Some(id) == self.current_id
	}

	pub(crate) fn record_completion(&mut self, id: u64) {
		if self.matches_latest(id) {
			self.in_flight = false;
		}
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	/// Number of lookups handed to the executor so far.
	pub(crate) fn issued(&self) -> u64 {
		self.next_id
	}

	pub(crate) fn try_recv(&self) -> Result<LookupResponse, TryRecvError> {
		self.rx.try_recv()
	}
}
