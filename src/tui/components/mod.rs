//! Widgets drawn below the search row.

/// Country card grid.
pub mod cards;
/// Loading, error, and placeholder lines.
pub mod status;

pub use cards::{CARD_HEIGHT, CARD_MIN_WIDTH, GridMetrics, render_cards};
pub use status::{render_error, render_loader, render_placeholder};
