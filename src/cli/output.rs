use std::fmt::Write;

use anyhow::Result;
use rcountries::view::{Body, EMPTY_PLACEHOLDER, View};
use serde_json::json;

use crate::workflow::LookupReport;

/// Render the lookup report the way the UI would lay it out, as plain text.
pub(crate) fn format_plain(report: &LookupReport) -> String {
	let view = View::build(&report.term, &report.state);
	let mut out = String::new();

	if let Some(message) = &view.error {
		let _ = writeln!(out, "{message}");
	}

	match &view.body {
		Body::Loading => {
			let _ = writeln!(out, "Loading…");
		}
		Body::Results(list) if list.cards().is_empty() => {
			let _ = writeln!(out, "{EMPTY_PLACEHOLDER}");
		}
		Body::Results(list) => {
			for (index, card) in list.cards().iter().enumerate() {
				if index > 0 {
					let _ = writeln!(out);
				}
				let _ = writeln!(out, "{}", card.title);
				for (label, value) in card.details() {
					let _ = writeln!(out, "  {label}: {value}");
				}
			}
		}
	}

	out
}

/// Print a plain-text representation of the lookup report.
pub(crate) fn print_plain(report: &LookupReport) {
	print!("{}", format_plain(report));
}

/// Format the lookup report as a JSON string.
pub(crate) fn format_report_json(report: &LookupReport) -> Result<String> {
	let payload = json!({
		"term": report.term,
		"state": report.state.label(),
		"error": report.state.error(),
		"countries": report.state.records(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the lookup report.
pub(crate) fn print_json(report: &LookupReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}
