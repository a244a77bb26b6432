use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use rcountries::app_dirs;

/// Produce the full version banner including config and cache directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let cache_dir = match app_dirs::get_cache_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("rcountries {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "cache directory: {cache_dir}");

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments, exiting with usage on error.
pub(crate) fn parse_cli() -> CliArgs {
	CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
	name = "rcountries",
	version,
	long_version = long_version(),
	about = "Look up countries by name from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `rcountries` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "RCOUNTRIES_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long,
		value_name = "TEXT",
		help = "Search term to start with (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long = "api-url",
		value_name = "URL",
		help = "Base URL of the REST Countries API (default: https://restcountries.com)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "empty-term",
		value_enum,
		help = "What an empty search term does (default: stay-loading)"
	)]
	pub(crate) empty_term: Option<EmptyTermArg>,
	#[arg(
		long = "responses",
		value_enum,
		help = "Which lookup responses may update the screen (default: latest-only)"
	)]
	pub(crate) responses: Option<ResponsesArg>,
	#[arg(
		long,
		value_name = "TEXT",
		help = "Run one lookup, print the result and exit instead of opening the UI"
	)]
	pub(crate) lookup: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "How to print the result of --lookup"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log verbosity: off, error, warn, info, debug, trace (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: rcountries.log in the cache directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Empty-term policies accepted via the command line.
pub(crate) enum EmptyTermArg {
	StayLoading,
	Idle,
}

impl EmptyTermArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			EmptyTermArg::StayLoading => "stay-loading",
			EmptyTermArg::Idle => "idle",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Response ordering policies accepted via the command line.
pub(crate) enum ResponsesArg {
	LatestOnly,
	LastArrival,
}

impl ResponsesArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			ResponsesArg::LatestOnly => "latest-only",
			ResponsesArg::LastArrival => "last-arrival",
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats for `--lookup`.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn command_definition_is_valid() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_parse() {
		let parsed = CliArgs::try_parse_from(["rcountries"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.lookup.is_none());
		assert!(parsed.empty_term.is_none());
	}

	#[test]
	fn policy_flags_use_kebab_case_names() {
		let parsed = CliArgs::try_parse_from([
			"rcountries",
			"--empty-term",
			"stay-loading",
			"--responses",
			"last-arrival",
		])
		.expect("parses");
		assert_eq!(parsed.empty_term, Some(EmptyTermArg::StayLoading));
		assert_eq!(parsed.responses.map(ResponsesArg::as_str), Some("last-arrival"));
	}

	#[test]
	fn lookup_mode_accepts_json_output() {
		let parsed =
			CliArgs::try_parse_from(["rcountries", "--lookup", "peru", "-o", "json"]).expect("parses");
		assert_eq!(parsed.lookup.as_deref(), Some("peru"));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
