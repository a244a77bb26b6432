//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so events are written to a log file
//! instead of stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "rcountries.log";

/// Default log location inside the cache directory.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_cache_dir()?.join(LOG_FILE_NAME))
}

/// Filter that applies `level` unless `RUST_LOG` says otherwise.
pub fn build_filter(level: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(level.into())
		.from_env_lossy()
}

/// Whether `level` or `RUST_LOG` asks for any output at all.
pub fn is_enabled(level: LevelFilter) -> bool {
	level != LevelFilter::OFF || std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
}

/// Install the global subscriber, appending to `path` or to
/// [`default_log_file`] when no path is given.
///
/// Does nothing when logging is disabled. The default location is not
/// resolved in that case.
pub fn initialize(level: LevelFilter, path: Option<&Path>) -> Result<()> {
	initialize_with(level, || match path {
		Some(path) => Ok(path.to_path_buf()),
		None => default_log_file(),
	})
}

fn initialize_with(level: LevelFilter, log_path: impl FnOnce() -> Result<PathBuf>) -> Result<()> {
	if !is_enabled(level) {
		return Ok(());
	}

	let file = open_log_file(&log_path()?)?;
	tracing_subscriber::fmt()
		.with_env_filter(build_filter(level))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}

fn open_log_file(path: &Path) -> Result<File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}

	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_file_is_created_with_parents() {
		let dir = tempfile::tempdir().expect("tempdir");
		let path = dir.path().join("nested").join("app.log");

		open_log_file(&path).expect("open log file");
		assert!(path.exists());
	}

	#[test]
	fn disabled_logging_never_resolves_a_path() {
		if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
			return;
		}
		let result = initialize_with(LevelFilter::OFF, || Err(anyhow!("no cache directory")));
		assert!(result.is_ok());
	}

	#[test]
	fn enabled_logging_reports_path_failures() {
		let err = initialize_with(LevelFilter::WARN, || Err(anyhow!("no cache directory")))
			.expect_err("path failure");
		assert_eq!(err.to_string(), "no cache directory");
	}
}
