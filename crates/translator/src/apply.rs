//! Operation-to-change applicator.

use tandem_primitives::{Component, LinearOperation, from_offset};

use crate::editor::Editor;

/// Replays `op` onto the live editor as a series of range edits.
///
/// A cursor starts at zero and moves as components are consumed: retain
/// skips, insert writes at the cursor and steps past the new text, delete
/// removes at the cursor and stays put. Offsets beyond the buffer clip to
/// its end; any drift that causes is the reconciler's to repair.
pub fn apply_operation<E: Editor + ?Sized>(op: &LinearOperation, editor: &mut E) {
	let mut text_index: usize = 0;

	for component in op {
		match component {
			Component::Retain(n) => {
				text_index = text_index.saturating_add(*n);
			}
			Component::Insert(text) => {
				let at = from_offset(text_index, &*editor);
				editor.replace_range(text, at, at);
				text_index = text_index.saturating_add(text.chars().count());
			}
			Component::Delete(n) => {
				let from = from_offset(text_index, &*editor);
				let to = from_offset(text_index.saturating_add(*n), &*editor);
				editor.replace_range("", from, to);
			}
		}
	}
}
