use super::{Inner, Suppression, Translator};
use crate::editor::Editor;

impl<E: Editor + 'static> Inner<E> {
	/// Compares `editor` with the authoritative value and overwrites it on
	/// mismatch. Returns whether they already agreed.
	pub(super) fn reconcile_editor(&self, editor: &mut dyn Editor) -> bool {
		let Some(authoritative) = self.hooks.authoritative_value() else {
			verbose!(self, "no authoritative value to reconcile against");
			return true;
		};

		let local = editor.value();
		if local == authoritative {
			verbose!(self, "editor matches shared value");
			return true;
		}

		tracing::warn!(
			expected = %authoritative,
			found = %local,
			"editor diverged from shared value, resetting"
		);
		let _guard = Suppression::enter(&self.state);
		editor.set_value(&authoritative);
		false
	}
}

impl<E: Editor + 'static> Translator<E> {
	/// Forces the editor to equal the authoritative value.
	///
	/// Returns true if no repair was needed. Idempotent. While the editor is
	/// mid-mutation the check is skipped and reported as a match; the
	/// mutation in progress reconciles on its own once it is submitted.
	pub fn reconcile(&self) -> bool {
		let Ok(mut editor) = self.inner.editor.try_borrow_mut() else {
			tracing::warn!(source = %self.inner.tag, "editor busy, skipping reconcile");
			return true;
		};
		self.inner.reconcile_editor(&mut *editor)
	}
}
