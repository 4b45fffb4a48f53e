//! Editor change notifications in line/column space.

use serde::{Deserialize, Serialize};
use tandem_primitives::{CharLen, Position};

/// One change reported by the editor.
///
/// `from`/`to` bound the replaced range in pre-change coordinates. The
/// removed and inserted texts are given as line arrays: a single-line text
/// is one element, and `"a\nb"` is `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorChange {
	/// Start of the replaced range.
	pub from: Position,
	/// End of the replaced range (exclusive).
	pub to: Position,
	/// Lines of the text that was removed.
	pub removed: Vec<String>,
	/// Lines of the text that replaced it.
	pub inserted: Vec<String>,
}

impl EditorChange {
	/// Builds a change from the raw removed and inserted texts.
	pub fn new(from: Position, to: Position, removed: &str, inserted: &str) -> Self {
		Self {
			from,
			to,
			removed: split_lines(removed),
			inserted: split_lines(inserted),
		}
	}

	/// Returns true if nothing was removed.
	pub fn is_pure_insertion(&self) -> bool {
		self.from == self.to
	}

	/// Returns true if nothing was inserted.
	pub fn is_pure_deletion(&self) -> bool {
		matches!(self.inserted.as_slice(), [only] if only.is_empty())
	}

	/// Length in characters of the removed span.
	///
	/// Each removed line contributes its length plus one terminator, minus
	/// the final terminator, which is the join point with what follows.
	pub fn removed_len(&self) -> CharLen {
		let total: CharLen = self
			.removed
			.iter()
			.map(|line| line.chars().count() + 1)
			.sum();
		total.saturating_sub(1)
	}

	/// The inserted lines joined back into text.
	pub fn inserted_text(&self) -> String {
		self.inserted.join("\n")
	}
}

/// Splits text into lines the way the editor reports them.
///
/// An empty text is one empty line and a trailing newline yields a
/// trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
	text.split('\n').map(str::to_string).collect()
}
