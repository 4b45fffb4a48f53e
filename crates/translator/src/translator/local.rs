use super::{Inner, TranslatorState};
use crate::change::EditorChange;
use crate::editor::Editor;
use crate::encode::encode_change;

impl<E: Editor + 'static> Inner<E> {
	/// Editor listener body: encodes a user change and submits it.
	///
	/// `editor` is the editor that emitted the change, already mutated.
	pub(super) fn handle_change(&self, editor: &mut dyn Editor, change: &EditorChange) {
		match self.state.get() {
			TranslatorState::Listening => {}
			TranslatorState::Suppressed => {
				verbose!(self, from = ?change.from, to = ?change.to, "suppressed programmatic change");
				return;
			}
			TranslatorState::Idle => return,
		}

		let op = encode_change(change, &*editor);
		if op.is_noop() {
			return;
		}
		verbose!(self, op = %op.to_json(), source = %self.tag, "submitting local change");

		if let Err(error) = self.hooks.submit(&op, &self.tag) {
			tracing::error!(%error, op = %op.to_json(), "failed to submit local change");
			return;
		}
		self.reconcile_editor(editor);
	}
}
