use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::tui::style::Theme;

/// Spinner followed by `label`.
pub fn render_loader(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}
	let spinner = Throbber::default()
		.style(theme.loader)
		.throbber_style(theme.loader);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), theme.loader),
	]);
	frame.render_widget(Paragraph::new(line), area);
}

pub fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
	let paragraph = Paragraph::new(Span::styled(message.to_string(), theme.error))
		.wrap(Wrap { trim: true });
	frame.render_widget(paragraph, area);
}

pub fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	frame.render_widget(
		Paragraph::new(Span::styled(text.to_string(), theme.empty)),
		area,
	);
}
