use std::path::PathBuf;
use std::str::FromStr;

use reqwest::Url;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use rcountries::controller::{ControllerOptions, EmptyTermPolicy, ResponseOrdering};
use rcountries::lookup::DEFAULT_BASE_URL;
use rcountries::tui::{UiLabels, style};

use super::resolved::Settings;
use super::{ConfigError, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

/// Configuration as read from files and the environment, before CLI
/// overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	behavior: BehaviorSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	initial_query: Option<String>,
	heading: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct BehaviorSection {
	empty_term: Option<String>,
	responses: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
	file: Option<PathBuf>,
}

/// Settings whose final value came from a CLI flag.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct CliOverrides {
	api_url: bool,
	theme: bool,
	empty_term: bool,
	responses: bool,
	log_level: bool,
}

impl RawConfig {
	/// Apply CLI flags on top of the file and environment values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) -> CliOverrides {
		let mut overrides = CliOverrides::default();

		if let Some(url) = &cli.api_url {
			self.api.base_url = Some(url.clone());
			overrides.api_url = true;
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
			overrides.theme = true;
		}
		if let Some(query) = &cli.query {
			self.ui.initial_query = Some(query.clone());
		}
		if let Some(policy) = cli.empty_term {
			self.behavior.empty_term = Some(policy.as_str().to_string());
			overrides.empty_term = true;
		}
		if let Some(ordering) = cli.responses {
			self.behavior.responses = Some(ordering.as_str().to_string());
			overrides.responses = true;
		}
		if let Some(level) = &cli.log_level {
			self.logging.level = Some(level.clone());
			overrides.log_level = true;
		}
		if let Some(file) = &cli.log_file {
			self.logging.file = Some(file.clone());
		}

		overrides
	}

	/// Validate every value and fill in defaults.
	pub(super) fn resolve(self, overrides: &CliOverrides) -> Result<Settings, ConfigError> {
		let api_base_url = self
			.api
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
		validate_base_url(
			&api_base_url,
			origin(overrides.api_url, "--api-url", "api.base_url"),
		)?;

		let theme_name = self.ui.theme.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = style::by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"theme",
				theme_name.clone(),
				origin(overrides.theme, "--theme", "ui.theme"),
				format!("unknown theme (available: {})", style::names().join(", ")),
			)
		})?;

		let empty_term = parse_option::<EmptyTermPolicy>(
			"empty_term",
			self.behavior.empty_term,
			origin(overrides.empty_term, "--empty-term", "behavior.empty_term"),
		)?;
		let responses = parse_option::<ResponseOrdering>(
			"responses",
			self.behavior.responses,
			origin(overrides.responses, "--responses", "behavior.responses"),
		)?;

		let log_level = match self.logging.level {
			None => DEFAULT_LOG_LEVEL,
			Some(value) => LevelFilter::from_str(value.trim()).map_err(|_| {
				ConfigError::invalid(
					"log level",
					value.clone(),
					origin(overrides.log_level, "--log-level", "logging.level"),
					"expected one of: off, error, warn, info, debug, trace",
				)
			})?,
		};

		Ok(Settings {
			api_base_url,
			theme_name,
			theme,
			initial_query: self.ui.initial_query.unwrap_or_default(),
			heading: self
				.ui
				.heading
				.unwrap_or_else(|| UiLabels::default().heading),
			controller: ControllerOptions {
				empty_term,
				responses,
			},
			log_level,
			log_file: self.logging.file,
		})
	}
}

fn origin(from_cli: bool, flag: &'static str, key: &'static str) -> SettingSource {
	if from_cli {
		SettingSource::CliFlag(flag)
	} else {
		SettingSource::ConfigKey(key)
	}
}

fn parse_option<T>(
	key: &'static str,
	value: Option<String>,
	source: SettingSource,
) -> Result<T, ConfigError>
where
	T: FromStr + Default,
	T::Err: ToString,
{
	match value {
		None => Ok(T::default()),
		Some(value) => T::from_str(&value)
			.map_err(|err| ConfigError::invalid(key, value.clone(), source, err.to_string())),
	}
}

fn validate_base_url(value: &str, source: SettingSource) -> Result<(), ConfigError> {
	match Url::parse(value) {
		Ok(url) if !url.cannot_be_a_base() => Ok(()),
		Ok(_) => Err(ConfigError::invalid(
			"API base URL",
			value,
			source,
			"URL cannot carry a path",
		)),
		Err(err) => Err(ConfigError::invalid("API base URL", value, source, err.to_string())),
	}
}
