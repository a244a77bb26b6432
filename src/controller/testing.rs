//! Scripted executor used by controller and UI tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;

use crate::country::Country;
use crate::lookup::{LookupError, LookupExecutor, LookupRequest, LookupResponse};

/// Holds every dispatched lookup until the test answers it explicitly.
#[derive(Clone, Default)]
pub(crate) struct ScriptedExecutor {
	pending: Rc<RefCell<Vec<(LookupRequest, Sender<LookupResponse>)>>>,
}

impl ScriptedExecutor {
	pub(crate) fn boxed(&self) -> Box<dyn LookupExecutor> {
		Box::new(self.clone())
	}

	/// Terms of every lookup dispatched so far, in issue order.
	pub(crate) fn terms(&self) -> Vec<String> {
		self.pending
			.borrow()
			.iter()
			.map(|(request, _)| request.term.clone())
			.collect()
	}

	pub(crate) fn id_for(&self, term: &str) -> u64 {
		self.pending
			.borrow()
			.iter()
			.rev()
			.find(|(request, _)| request.term == term)
			.map(|(request, _)| request.id)
			.unwrap_or_else(|| panic!("no lookup was issued for `{term}`"))
	}

	pub(crate) fn respond(&self, term: &str, outcome: Result<Vec<Country>, LookupError>) {
		let pending = self.pending.borrow();
		let (request, reply) = pending
			.iter()
			.rev()
			.find(|(request, _)| request.term == term)
			.unwrap_or_else(|| panic!("no lookup was issued for `{term}`"));
		reply
			.send(LookupResponse {
				id: request.id,
				term: request.term.clone(),
				outcome,
			})
			.expect("controller receiver alive");
	}
}

impl LookupExecutor for ScriptedExecutor {
	fn execute(&self, request: LookupRequest, reply: Sender<LookupResponse>) {
		self.pending.borrow_mut().push((request, reply));
	}
}

pub(crate) fn countries(names: &[&str]) -> Vec<Country> {
	names.iter().map(|name| Country::named(*name, "")).collect()
}
