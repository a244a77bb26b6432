use std::path::PathBuf;
use std::{env, fmt};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use rcountries::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "rcountries";

/// Where a setting value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Build a [`Config`] from the default locations, `--config` files and the
/// environment. Later sources win.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

	builder.build().context("failed to read configuration sources")
}

/// Default configuration file locations, lowest precedence first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".rcountries.toml"));
		files.push(current_dir.join("rcountries.toml"));
	}

	files
}
