use crate::country::Country;

/// Result of the most recent lookup as seen by the UI.
///
/// Exactly one variant is active. Every [`Action`] fully replaces the
/// previous variant; nothing is merged across transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultState {
	#[default]
	Idle,
	Loading,
	Loaded(Vec<Country>),
	Errored(String),
}

/// Transition events fed to [`ResultState::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	Loading,
	Loaded(Vec<Country>),
	Failed(String),
	/// Back to `Idle` with nothing listed.
	Reset,
}

impl ResultState {
	/// Apply a transition event.
	pub fn dispatch(&mut self, action: Action) {
		*self = match action {
			Action::Loading => Self::Loading,
			Action::Loaded(records) => Self::Loaded(records),
			Action::Failed(message) => Self::Errored(message),
			Action::Reset => Self::Idle,
		};
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Errored(message) => Some(message),
			_ => None,
		}
	}

	/// Records to list; empty for every variant except `Loaded`.
	#[must_use]
	pub fn records(&self) -> &[Country] {
		match self {
			Self::Loaded(records) => records,
			_ => &[],
		}
	}

	/// Short lowercase name of the active variant, used in logs and output.
	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading => "loading",
			Self::Loaded(_) => "loaded",
			Self::Errored(_) => "errored",
		}
	}
}
