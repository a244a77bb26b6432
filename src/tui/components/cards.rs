use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::style::Theme;
use crate::view::CountryCard;

/// Narrowest a card is allowed to get before the grid drops a column.
pub const CARD_MIN_WIDTH: u16 = 34;
/// Border, four detail lines, border.
pub const CARD_HEIGHT: u16 = 6;

/// Shape of the card grid for a given area and card count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridMetrics {
	pub columns: usize,
	pub visible_rows: usize,
	pub total_rows: usize,
}

impl GridMetrics {
	#[must_use]
	pub fn compute(area: Rect, cards: usize) -> Self {
		let columns = usize::from((area.width / CARD_MIN_WIDTH).max(1));
		let visible_rows = usize::from(area.height / CARD_HEIGHT);
		let total_rows = cards.div_ceil(columns);
		Self {
			columns,
			visible_rows,
			total_rows,
		}
	}

	/// Largest row offset that still fills the viewport.
	#[must_use]
	pub fn max_scroll(&self) -> usize {
		self.total_rows.saturating_sub(self.visible_rows.max(1))
	}
}

/// Draw `cards` as a grid starting at card row `scroll`.
///
/// Returns the grid metrics so the caller can clamp later scrolling.
pub fn render_cards(
	frame: &mut Frame,
	area: Rect,
	cards: &[CountryCard],
	scroll: usize,
	theme: &Theme,
) -> GridMetrics {
	let metrics = GridMetrics::compute(area, cards.len());
	if metrics.visible_rows == 0 || cards.is_empty() {
		return metrics;
	}

	let scroll = scroll.min(metrics.max_scroll());
	let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); metrics.visible_rows])
		.split(area);

	for (row_index, row_area) in row_areas.iter().enumerate() {
		let first = (scroll + row_index) * metrics.columns;
		if first >= cards.len() {
			break;
		}
		let columns = Layout::horizontal(vec![Constraint::Fill(1); metrics.columns]).split(*row_area);
		for (card, card_area) in cards[first..].iter().zip(columns.iter()) {
			render_card(frame, *card_area, card, theme);
		}
	}

	metrics
}

fn render_card(frame: &mut Frame, area: Rect, card: &CountryCard, theme: &Theme) {
	let block = Block::bordered()
		.border_style(theme.card_border)
		.title(Span::styled(format!(" {} ", card.title), theme.card_title));

	let lines: Vec<Line> = card
		.details()
		.into_iter()
		.map(|(label, value)| {
			Line::from(vec![
				Span::styled(format!("{label}: "), theme.detail_label),
				Span::raw(value.to_string()),
			])
		})
		.collect();

	frame.render_widget(Paragraph::new(lines).block(block), area);
}
