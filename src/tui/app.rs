//! Terminal front-end state: the controller plus everything only the UI
//! needs (edit buffer, theme, spinner, scroll position).

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::ThrobberState;

use super::components::{
	GridMetrics, render_cards, render_error, render_loader, render_placeholder,
};
use super::config::UiLabels;
use super::input::{FieldKind, SearchInput};
use super::style::Theme;
use crate::controller::Controller;
use crate::view::{Body, EMPTY_PLACEHOLDER, ResultList, View};

/// Identifier of the search field.
pub const SEARCH_FIELD_ID: &str = "search";

/// What the session looked like when the user quit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
	pub term: String,
	pub state: &'static str,
	pub shown: usize,
}

pub struct App<'a> {
	controller: Controller,
	input: SearchInput<'a>,
	labels: UiLabels,
	theme: Theme,
	throbber_state: ThrobberState,
	scroll: usize,
	grid: GridMetrics,
}

impl<'a> App<'a> {
	pub fn new(controller: Controller, labels: UiLabels) -> Self {
		let mut input = SearchInput::new(SEARCH_FIELD_ID, FieldKind::Text, labels.search_label.clone())
			.with_button_label(labels.button_label.clone());
		input.set_value(controller.term());

		Self {
			controller,
			input,
			labels,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			scroll: 0,
			grid: GridMetrics::default(),
		}
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	pub fn controller(&self) -> &Controller {
		&self.controller
	}

	pub fn input(&self) -> &SearchInput<'a> {
		&self.input
	}

	/// Focus the field and run the initial lookup. Safe to call repeatedly.
	pub fn mount(&mut self) {
		self.input.mount();
		self.controller.mount();
	}

	/// Apply arrived lookup responses and advance the spinner.
	pub fn tick(&mut self) {
		if self.controller.pump() > 0 {
			self.scroll = 0;
		}
		self.throbber_state.calc_next();
	}

	pub fn summary(&self) -> SessionSummary {
		let view = self.controller.view();
		SessionSummary {
			term: view.term.clone(),
			state: self.controller.state().label(),
			shown: view.card_count(),
		}
	}

	/// Process a key press. Returns a summary when the user quits.
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Option<SessionSummary> {
		match key.code {
			KeyCode::Esc => return Some(self.summary()),
			KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				return Some(self.summary());
			}
			KeyCode::Tab | KeyCode::BackTab => self.input.cycle_focus(),
			KeyCode::Up => self.scroll_by(-1),
			KeyCode::Down => self.scroll_by(1),
			KeyCode::PageUp => self.scroll_by(-page(self.grid)),
			KeyCode::PageDown => self.scroll_by(page(self.grid)),
			_ => {
				if let Some(value) = self.input.handle_key(key)
					&& self.controller.set_term(value)
				{
					self.scroll = 0;
				}
			}
		}
		None
	}

	fn scroll_by(&mut self, delta: isize) {
		let next = self.scroll.saturating_add_signed(delta);
		self.scroll = next.min(self.grid.max_scroll());
	}

	/// Draw the whole screen from the controller's current view.
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let view = self.controller.view();
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let error_height = u16::from(view.error.is_some());
		let [heading_area, _, search_area, _, error_area, body_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(1),
			Constraint::Length(error_height),
			Constraint::Min(0),
		])
		.areas(area);

		frame.render_widget(
			Paragraph::new(self.labels.heading.as_str()).style(self.theme.heading),
			heading_area,
		);
		self.input.render(frame, search_area, &self.theme);

		if let Some(message) = &view.error {
			render_error(frame, error_area, message, &self.theme);
		}

		self.draw_body(frame, body_area, &view);
	}

	fn draw_body(&mut self, frame: &mut Frame, area: Rect, view: &View) {
		match &view.body {
			Body::Loading => {
				self.grid = GridMetrics::default();
				render_loader(
					frame,
					area,
					&self.labels.loading_label,
					&self.throbber_state,
					&self.theme,
				);
			}
			Body::Results(ResultList::Empty) => {
				self.grid = GridMetrics::default();
				render_placeholder(frame, area, EMPTY_PLACEHOLDER, &self.theme);
			}
			Body::Results(ResultList::Cards(cards)) => {
				self.grid = render_cards(frame, area, cards, self.scroll, &self.theme);
				self.scroll = self.scroll.min(self.grid.max_scroll());
			}
		}
	}
}

fn page(grid: GridMetrics) -> isize {
	isize::try_from(grid.visible_rows.max(1)).unwrap_or(1)
}
