use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use super::{CountryApi, LookupRequest, LookupResponse};

/// Runs lookups off the UI thread and reports each outcome on `reply`.
///
/// Implementations must eventually send exactly one [`LookupResponse`] per
/// request, carrying the request id unchanged.
pub trait LookupExecutor {
	fn execute(&self, request: LookupRequest, reply: Sender<LookupResponse>);
}

/// Spawns one short-lived worker thread per lookup.
///
/// Workers are never cancelled; a superseded lookup still runs to completion
/// and its response is filtered by the receiver.
pub struct ThreadedExecutor {
	api: Arc<dyn CountryApi>,
}

impl ThreadedExecutor {
	pub fn new(api: Arc<dyn CountryApi>) -> Self {
		Self { api }
	}
}

impl LookupExecutor for ThreadedExecutor {
	fn execute(&self, request: LookupRequest, reply: Sender<LookupResponse>) {
		let api = Arc::clone(&self.api);
		thread::spawn(move || {
			let LookupRequest { id, term } = request;
			let outcome = api.search(&term);
			// The receiver is gone once the UI has shut down.
			let _ = reply.send(LookupResponse { id, term, outcome });
		});
	}
}
