//! Color themes for the terminal UI.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every element drawn by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub heading: Style,
	pub label: Style,
	pub input: Style,
	pub button: Style,
	pub button_focused: Style,
	pub card_border: Style,
	pub card_title: Style,
	pub detail_label: Style,
	pub error: Style,
	pub empty: Style,
	pub loader: Style,
}

pub const SLATE: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::LightCyan),
	input: Style::new().fg(Color::Rgb(226, 232, 240)),
	button: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(30, 41, 59)),
	button_focused: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(250, 204, 21))
		.add_modifier(Modifier::BOLD),
	card_border: Style::new().fg(Color::Rgb(71, 85, 105)),
	card_title: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	detail_label: Style::new().fg(Color::Rgb(148, 163, 184)),
	error: Style::new().fg(Color::LightRed),
	empty: Style::new().fg(Color::DarkGray),
	loader: Style::new().fg(Color::LightCyan),
};

pub const OCEAN: Theme = Theme {
	heading: Style::new()
		.fg(Color::Rgb(186, 230, 253))
		.add_modifier(Modifier::BOLD),
	label: Style::new().fg(Color::Rgb(125, 211, 252)),
	input: Style::new().fg(Color::White),
	button: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(12, 74, 110)),
	button_focused: Style::new()
		.fg(Color::Rgb(8, 47, 73))
		.bg(Color::Rgb(56, 189, 248))
		.add_modifier(Modifier::BOLD),
	card_border: Style::new().fg(Color::Rgb(14, 116, 144)),
	card_title: Style::new()
		.fg(Color::Rgb(94, 234, 212))
		.add_modifier(Modifier::BOLD),
	detail_label: Style::new().fg(Color::Rgb(103, 232, 249)),
	error: Style::new().fg(Color::Rgb(251, 113, 133)),
	empty: Style::new().fg(Color::Gray),
	loader: Style::new().fg(Color::Rgb(56, 189, 248)),
};

/// Attribute-only theme for terminals without color.
pub const MONO: Theme = Theme {
	heading: Style::new().add_modifier(Modifier::BOLD),
	label: Style::new(),
	input: Style::new(),
	button: Style::new().add_modifier(Modifier::DIM),
	button_focused: Style::new().add_modifier(Modifier::REVERSED),
	card_border: Style::new(),
	card_title: Style::new().add_modifier(Modifier::BOLD),
	detail_label: Style::new().add_modifier(Modifier::DIM),
	error: Style::new().add_modifier(Modifier::BOLD),
	empty: Style::new().add_modifier(Modifier::DIM),
	loader: Style::new(),
};

const BUILTINS: [(&str, Theme); 3] = [("slate", SLATE), ("ocean", OCEAN), ("mono", MONO)];

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Every builtin theme paired with its canonical name.
#[must_use]
pub fn builtin_themes() -> Vec<(&'static str, Theme)> {
	BUILTINS.to_vec()
}

/// Canonical names of the builtin themes, in display order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILTINS.iter().map(|(name, _)| *name).collect()
}

/// Look up a builtin theme, ignoring case and `_`/`-` differences.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILTINS
		.iter()
		.find(|(candidate, _)| *candidate == normalized)
		.map(|(_, theme)| *theme)
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase().replace('_', "-")
}
