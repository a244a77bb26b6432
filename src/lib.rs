//! Terminal country lookup against the REST Countries API.
//!
//! The [`controller`] owns the search term and result state machine,
//! [`lookup`] performs the HTTP requests off the UI thread, [`view`] turns
//! state into display text, and [`tui`] draws it with ratatui.

pub mod app_dirs;
pub mod controller;
pub mod country;
pub mod logging;
pub mod lookup;
pub mod tui;
pub mod view;

pub use controller::{Controller, ControllerOptions, EmptyTermPolicy, ResponseOrdering, ResultState};
pub use country::Country;
pub use lookup::{CountryApi, HttpCountryApi, LookupError};
pub use view::View;
