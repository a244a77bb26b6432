/// Text rendered around the search row and result area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Page heading drawn on the first row.
	pub heading: String,
	/// Label in front of the search field.
	pub search_label: String,
	/// Caption of the submit button.
	pub button_label: String,
	/// Text next to the spinner while a lookup is pending.
	pub loading_label: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			heading: "REST Countries".to_string(),
			search_label: "Search Country:".to_string(),
			button_label: "Search".to_string(),
			loading_label: "Loading…".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the heading, keeping the other labels.
	#[must_use]
	pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
		self.heading = heading.into();
		self
	}
}
