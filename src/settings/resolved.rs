use std::path::PathBuf;

use rcountries::controller::ControllerOptions;
use rcountries::tui::{Theme, UiLabels};
use tracing::level_filters::LevelFilter;

/// Application-ready configuration.
#[derive(Debug, Clone)]
pub struct Settings {
	pub api_base_url: String,
	pub theme_name: String,
	pub theme: Theme,
	pub initial_query: String,
	pub heading: String,
	pub controller: ControllerOptions,
	pub log_level: LevelFilter,
	/// Explicit log file; `None` means the cache directory default.
	pub log_file: Option<PathBuf>,
}

impl Settings {
	pub fn labels(&self) -> UiLabels {
		UiLabels::default().with_heading(self.heading.clone())
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  API base URL: {}", self.api_base_url);
		println!("  Theme: {}", self.theme_name);
		println!("  Heading: {}", self.heading);
		if !self.initial_query.is_empty() {
			println!("  Initial query: {}", self.initial_query);
		}
		println!("  Empty term: {}", self.controller.empty_term);
		println!("  Responses: {}", self.controller.responses);
		println!("  Log level: {}", self.log_level);
		match &self.log_file {
			Some(path) => println!("  Log file: {}", path.display()),
			None => println!("  Log file: (cache directory)"),
		}
	}
}
