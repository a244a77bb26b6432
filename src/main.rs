mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use rcountries::{logging, tui};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let settings = settings::load(&cli)?;

	if cli.print_config {
		settings.print_summary();
	}

	logging::initialize(settings.log_level, settings.log_file.as_deref())?;
	tracing::debug!(?settings, "configuration resolved");

	let workflow = SearchWorkflow::from_settings(settings);
	match cli.lookup {
		Some(term) => run_lookup(&workflow, &term, cli.output),
		None => {
			let summary = workflow.run_interactive()?;
			tracing::info!(term = %summary.term, state = summary.state, shown = summary.shown, "session ended");
			Ok(())
		}
	}
}

/// Execute a single lookup and print it in the chosen format.
fn run_lookup(workflow: &SearchWorkflow, term: &str, format: OutputFormat) -> Result<()> {
	let report = workflow.lookup_once(term)?;

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(())
}
