//! Wiring from resolved settings to a running controller.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use rcountries::controller::{Controller, ResultState};
use rcountries::lookup::{HttpCountryApi, LookupExecutor, ThreadedExecutor};
use rcountries::tui::{self, App, SessionSummary};

use crate::settings::Settings;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Final state of a non-interactive lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupReport {
	pub(crate) term: String,
	pub(crate) state: ResultState,
}

pub(crate) struct SearchWorkflow {
	settings: Settings,
}

impl SearchWorkflow {
	pub(crate) fn from_settings(settings: Settings) -> Self {
		Self { settings }
	}

	fn executor(&self) -> Result<Box<dyn LookupExecutor>> {
		let api = HttpCountryApi::new(&self.settings.api_base_url)?;
		Ok(Box::new(ThreadedExecutor::new(Arc::new(api))))
	}

	fn controller(&self, term: &str) -> Result<Controller> {
		Ok(Controller::new(self.executor()?, self.settings.controller).with_initial_term(term))
	}

	/// Open the terminal UI.
	pub(crate) fn run_interactive(&self) -> Result<SessionSummary> {
		let controller = self.controller(&self.settings.initial_query)?;
		let mut app = App::new(controller, self.settings.labels()).with_theme(self.settings.theme);
		tui::run(&mut app)
	}

	/// Run the lookup procedure once for `term` and wait for it to settle.
	pub(crate) fn lookup_once(&self, term: &str) -> Result<LookupReport> {
		let mut controller = self.controller(term)?;
		controller.mount();
		settle(&mut controller);

		Ok(LookupReport {
			term: controller.term().to_string(),
			state: controller.state().clone(),
		})
	}
}

/// Pump responses until no lookup is outstanding.
fn settle(controller: &mut Controller) {
	while controller.is_in_flight() {
		if controller.pump() == 0 {
			thread::sleep(POLL_INTERVAL);
		}
	}
}

#[cfg(test)]
mod tests {
	use std::net::TcpListener;

	use rcountries::controller::ControllerOptions;
	use rcountries::tui::default_theme;
	use tracing::level_filters::LevelFilter;

	use super::*;

	fn workflow(base_url: String) -> SearchWorkflow {
		SearchWorkflow::from_settings(Settings {
			api_base_url: base_url,
			theme_name: "slate".into(),
			theme: default_theme(),
			initial_query: String::new(),
			heading: "REST Countries".into(),
			controller: ControllerOptions::default(),
			log_level: LevelFilter::OFF,
			log_file: None,
		})
	}

	fn closed_port_url() -> String {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
		let url = format!("http://{}", listener.local_addr().expect("local addr"));
		drop(listener);
		url
	}

	#[test]
	fn empty_term_settles_immediately_in_loading() {
		let report = workflow(closed_port_url()).lookup_once("").expect("lookup");
		assert_eq!(report.term, "");
		assert_eq!(report.state, ResultState::Loading);
	}

	#[test]
	fn unreachable_api_reports_an_error() {
		let report = workflow(closed_port_url()).lookup_once("peru").expect("lookup");
		assert_eq!(report.term, "peru");
		assert!(matches!(report.state, ResultState::Errored(ref message) if !message.is_empty()));
	}

	#[test]
	fn invalid_base_url_is_rejected_up_front() {
		assert!(workflow("not a url".into()).lookup_once("peru").is_err());
	}
}
