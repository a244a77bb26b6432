//! Interactive terminal front-end.
//!
//! [`App`] wraps a [`Controller`](crate::controller::Controller) with the
//! widgets that draw it, and [`run`] drives the event loop. Rendering reads
//! only the controller's [`View`](crate::view::View).

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, SEARCH_FIELD_ID, SessionSummary};
pub use config::UiLabels;
pub use input::{FieldKind, Focus, SearchInput};
pub use runtime::run;
pub use style::{Theme, builtin_themes, default_theme};
