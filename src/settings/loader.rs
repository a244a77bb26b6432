use anyhow::{Result, anyhow};

use super::raw::RawConfig;
use super::resolved::Settings;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining config files, environment variables and
/// CLI arguments.
pub fn load(cli: &CliArgs) -> Result<Settings> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	let overridden = raw.apply_cli_overrides(cli);
	Ok(raw.resolve(&overridden)?)
}
