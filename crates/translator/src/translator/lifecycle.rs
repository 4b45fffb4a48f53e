use std::rc::Rc;

use super::{Suppression, Translator, TranslatorState};
use crate::editor::Editor;

impl<E: Editor + 'static> Translator<E> {
	/// Attaches the editor listener and notifies the hooks. No-op when
	/// already listening.
	///
	/// Called while the editor is mid-mutation (from a document listener
	/// reacting to a local edit), a listener still held from an earlier
	/// [`Self::stop`] is reused; without one the translator stays idle.
	pub fn start(&self) {
		let inner = &self.inner;
		if inner.state.get() != TranslatorState::Idle {
			return;
		}

		let id = match inner.listener.get() {
			Some(id) => id,
			None => {
				let Ok(mut editor) = inner.editor.try_borrow_mut() else {
					tracing::warn!(source = %inner.tag, "editor busy, cannot start translator");
					return;
				};
				let weak = Rc::downgrade(inner);
				let id = editor.on_change(Box::new(move |editor, change| {
					if let Some(inner) = weak.upgrade() {
						inner.handle_change(editor, change);
					}
				}));
				inner.listener.set(Some(id));
				id
			}
		};
		inner.state.set(TranslatorState::Listening);

		verbose!(inner, listener = %id, source = %inner.tag, "translator started");
		inner.hooks.on_start();
	}

	/// Detaches the editor listener and notifies the hooks. No-op when idle.
	///
	/// While the editor is mid-mutation the listener cannot be removed; it
	/// stays attached but ignores changes until the translator restarts or
	/// is dropped.
	pub fn stop(&self) {
		let inner = &self.inner;
		if inner.state.get() == TranslatorState::Idle {
			return;
		}

		if let Some(id) = inner.listener.get() {
			match inner.editor.try_borrow_mut() {
				Ok(mut editor) => {
					editor.off_change(id);
					inner.listener.set(None);
				}
				Err(_) => {
					verbose!(inner, listener = %id, "editor busy, listener left dormant");
				}
			}
		}
		inner.state.set(TranslatorState::Idle);

		verbose!(inner, source = %inner.tag, "translator stopped");
		inner.hooks.on_stop();
	}

	/// Replaces the editor contents without producing an operation.
	///
	/// Starts the translator first if it is idle. Skipped with a warning
	/// while the editor is mid-mutation.
	pub fn set_value(&self, text: &str) {
		if self.inner.state.get() == TranslatorState::Idle {
			self.start();
		}

		let inner = &self.inner;
		let Ok(mut editor) = inner.editor.try_borrow_mut() else {
			tracing::warn!(len = text.chars().count(), "editor busy, not seeding");
			return;
		};
		verbose!(inner, len = text.chars().count(), "seeding editor");
		let _guard = Suppression::enter(&inner.state);
		editor.set_value(text);
	}

	/// Returns the editor contents, or `None` while the editor is
	/// mid-mutation.
	pub fn value(&self) -> Option<String> {
		self.inner.editor.try_borrow().ok().map(|editor| editor.value())
	}
}
