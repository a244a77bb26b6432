//! Labeled single-line search field with an attached (inert) submit button.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_textarea::{CursorMove, TextArea};
use unicode_width::UnicodeWidthStr;

use super::style::Theme;

const MASK_CHAR: char = '•';

/// How typed text is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
	#[default]
	Text,
	/// Characters are masked on screen; the value is unchanged.
	Password,
}

impl FieldKind {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Password => "password",
		}
	}
}

/// Which part of the search row receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
	#[default]
	None,
	Field,
	Button,
}

/// Labeled text field bound to an externally owned value.
///
/// Edits are reported through [`SearchInput::handle_key`], which returns the
/// new raw value whenever a key press changed it. The owner is expected to
/// feed its value back with [`SearchInput::set_value`] if it diverges.
pub struct SearchInput<'a> {
	id: String,
	kind: FieldKind,
	label: String,
	button_label: String,
	textarea: TextArea<'a>,
	focus: Focus,
	mounted: bool,
	autofocus_count: usize,
}

impl<'a> SearchInput<'a> {
	pub fn new(id: impl Into<String>, kind: FieldKind, label: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			kind,
			label: label.into(),
			button_label: "Search".to_string(),
			textarea: build_textarea("", kind),
			focus: Focus::None,
			mounted: false,
			autofocus_count: 0,
		}
	}

	#[must_use]
	pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
		self.button_label = label.into();
		self
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn button_label(&self) -> &str {
		&self.button_label
	}

	pub fn value(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Replace the displayed value without emitting a change.
	pub fn set_value(&mut self, value: &str) {
		if self.value() == value {
			return;
		}
		self.textarea = build_textarea(value, self.kind);
		self.apply_focus_style();
	}

	pub fn focus(&self) -> Focus {
		self.focus
	}

	/// Grant keyboard focus to the field the first time the input is mounted.
	pub fn mount(&mut self) {
		if self.mounted {
			return;
		}
		self.mounted = true;
		self.autofocus_count += 1;
		self.set_focus(Focus::Field);
	}

	/// How many times mounting moved focus into the field.
	pub fn autofocus_count(&self) -> usize {
		self.autofocus_count
	}

	/// Move focus between the field and the button.
	pub fn cycle_focus(&mut self) {
		let next = match self.focus {
			Focus::Field => Focus::Button,
			Focus::Button | Focus::None => Focus::Field,
		};
		self.set_focus(next);
	}

	fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.apply_focus_style();
	}

	fn apply_focus_style(&mut self) {
		let cursor = if self.focus == Focus::Field {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	/// Feed a key press to the focused element.
	///
	/// Returns the new value when the field text changed. Pressing the button
	/// does nothing.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
		match self.focus {
			Focus::Field if !inserts_line_break(&key) => {
				if self.textarea.input(key) {
					Some(self.value().to_string())
				} else {
					None
				}
			}
			Focus::Button => {
				if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
					tracing::trace!(id = %self.id, "search button pressed");
				}
				None
			}
			_ => None,
		}
	}

	/// Draw `label  [field]  [ button ]` on a single row.
	pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		if area.width == 0 || area.height == 0 {
			return;
		}

		let label = format!("{} ", self.label);
		let button = format!("[ {} ]", self.button_label);
		let [label_area, field_area, _gap, button_area] = Layout::horizontal([
			Constraint::Length(label.width() as u16),
			Constraint::Min(1),
			Constraint::Length(1),
			Constraint::Length(button.width() as u16),
		])
		.areas(area);

		frame.render_widget(Paragraph::new(label).style(theme.label), label_area);
		frame.buffer_mut().set_style(field_area, theme.input);
		frame.render_widget(&self.textarea, field_area);

		let button_style = if self.focus == Focus::Button {
			theme.button_focused
		} else {
			theme.button
		};
		frame.render_widget(
			Paragraph::new(Line::from(Span::styled(button, button_style))),
			button_area,
		);
	}
}

fn build_textarea<'a>(value: &str, kind: FieldKind) -> TextArea<'a> {
	let mut textarea = TextArea::new(vec![value.to_string()]);
	textarea.set_cursor_line_style(Style::default());
	textarea.set_cursor_style(Style::default());
	if kind == FieldKind::Password {
		textarea.set_mask_char(MASK_CHAR);
	}
	textarea.move_cursor(CursorMove::End);
	textarea
}

fn inserts_line_break(key: &KeyEvent) -> bool {
	match key.code {
		KeyCode::Enter => true,
		KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;
	use ratatui::crossterm::event::KeyEventKind;

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	fn input() -> SearchInput<'static> {
		SearchInput::new("search", FieldKind::Text, "Search Country:")
	}

	#[test]
	fn mount_focuses_field_once() {
		let mut input = input();
		assert_eq!(input.focus(), Focus::None);

		input.mount();
		input.mount();

		assert_eq!(input.focus(), Focus::Field);
		assert_eq!(input.autofocus_count(), 1);
	}

	#[test]
	fn typing_reports_each_new_value() {
		let mut input = input();
		input.mount();

		assert_eq!(input.handle_key(press(KeyCode::Char('f'))), Some("f".into()));
		assert_eq!(input.handle_key(press(KeyCode::Char('r'))), Some("fr".into()));
		assert_eq!(input.handle_key(press(KeyCode::Backspace)), Some("f".into()));
		assert_eq!(input.value(), "f");
	}

	#[test]
	fn unfocused_field_ignores_keys() {
		let mut input = input();
		assert_eq!(input.handle_key(press(KeyCode::Char('x'))), None);
		assert_eq!(input.value(), "");
	}

	#[test]
	fn enter_never_inserts_a_line_break() {
		let mut input = input();
		input.mount();
		input.handle_key(press(KeyCode::Char('a')));

		assert_eq!(input.handle_key(press(KeyCode::Enter)), None);
		let ctrl_m = KeyEvent::new(KeyCode::Char('m'), KeyModifiers::CONTROL);
		assert_eq!(input.handle_key(ctrl_m), None);
		assert_eq!(input.value(), "a");
	}

	#[test]
	fn button_press_is_inert() {
		let mut input = input();
		input.mount();
		input.handle_key(press(KeyCode::Char('a')));
		input.cycle_focus();
		assert_eq!(input.focus(), Focus::Button);

		let mut enter = press(KeyCode::Enter);
		enter.kind = KeyEventKind::Press;
		assert_eq!(input.handle_key(enter), None);
		assert_eq!(input.handle_key(press(KeyCode::Char('b'))), None);
		assert_eq!(input.value(), "a");

		input.cycle_focus();
		assert_eq!(input.focus(), Focus::Field);
		assert_eq!(input.autofocus_count(), 1);
	}

	#[test]
	fn set_value_keeps_cursor_at_end() {
		let mut input = input();
		input.mount();
		input.set_value("bra");
		assert_eq!(input.handle_key(press(KeyCode::Char('z'))), Some("braz".into()));
	}

	#[test]
	fn password_kind_masks_rendered_text() {
		let mut input = SearchInput::new("secret", FieldKind::Password, "Key:");
		input.set_value("abc");

		let mut terminal = Terminal::new(TestBackend::new(40, 1)).expect("terminal");
		terminal
			.draw(|frame| input.render(frame, frame.area(), &Theme::default()))
			.expect("draw");

		let row: String = terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect();
		assert!(row.contains("•••"));
		assert!(!row.contains("abc"));
		assert_eq!(input.value(), "abc");
	}

	#[test]
	fn field_text_uses_the_theme_input_style() {
		let mut input = input();
		input.set_value("chile");
		let theme = crate::tui::style::OCEAN;

		let mut terminal = Terminal::new(TestBackend::new(60, 1)).expect("terminal");
		terminal
			.draw(|frame| input.render(frame, frame.area(), &theme))
			.expect("draw");

		let buffer = terminal.backend().buffer();
		let field_start = "Search Country: ".len() as u16;
		assert_eq!(buffer[(field_start, 0)].symbol(), "c");
		assert_eq!(buffer[(field_start, 0)].fg, theme.input.fg.expect("input color"));
		assert_ne!(buffer[(0, 0)].fg, theme.input.fg.expect("input color"));
	}

	#[test]
	fn renders_label_value_and_button() {
		let mut input = input();
		input.set_value("chile");

		let mut terminal = Terminal::new(TestBackend::new(60, 1)).expect("terminal");
		terminal
			.draw(|frame| input.render(frame, frame.area(), &Theme::default()))
			.expect("draw");

		let row: String = terminal
			.backend()
			.buffer()
			.content
			.iter()
			.map(|cell| cell.symbol())
			.collect();
		assert!(row.starts_with("Search Country: chile"));
		assert!(row.contains("[ Search ]"));
	}
}
