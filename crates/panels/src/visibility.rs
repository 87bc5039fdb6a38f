//! Raw panel index to visible panel index projection.
//!
//! Navigation walks panels by raw index (hidden panels included) while the
//! user is shown the position among visible panels only. Each raw index maps
//! to its visible ordinal, or to `None` for hidden panels.

/// Raw index to visible ordinal mapping built during instantiation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
	entries: Vec<Option<usize>>,
	visible: usize,
	last_visible: Option<usize>,
}

impl VisibilityMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the next raw panel, returning its visible ordinal.
	pub fn push(&mut self, hidden: bool) -> Option<usize> {
		let raw = self.entries.len();
		let entry = if hidden {
			None
		} else {
			let ordinal = self.visible;
			self.visible += 1;
			self.last_visible = Some(raw);
			Some(ordinal)
		};
		self.entries.push(entry);
		entry
	}

	/// False for hidden panels and for indices past the end.
	pub fn is_visible(&self, raw: usize) -> bool {
		self.visibility_number(raw).is_some()
	}

	/// Visible ordinal of the panel at `raw`.
	pub fn visibility_number(&self, raw: usize) -> Option<usize> {
		self.entries.get(raw).copied().flatten()
	}

	/// Whether `raw` is the last visible panel.
	pub fn is_last(&self, raw: usize) -> bool {
		self.last_visible == Some(raw)
	}

	/// Raw index of the last visible panel.
	pub fn last_visible(&self) -> Option<usize> {
		self.last_visible
	}

	/// Raw index of the last visible panel, `0` when none is visible.
	///
	/// This is the navigator's historical "visible count". Use
	/// [`visible_len`](Self::visible_len) for the number of visible panels.
	pub fn count_visible(&self) -> usize {
		self.last_visible.unwrap_or(0)
	}

	pub fn visible_len(&self) -> usize {
		self.visible
	}

	/// Number of raw panels.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn entries(&self) -> &[Option<usize>] {
		&self.entries
	}
}
