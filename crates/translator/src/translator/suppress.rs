use std::cell::Cell;

use super::TranslatorState;

/// Scoped suppression of change encoding.
///
/// Entering switches the state to [`TranslatorState::Suppressed`]; dropping
/// restores the previous state on every exit path. A state changed by
/// someone else while suppressed (for example a stop) is left alone.
#[must_use = "suppression ends when the guard is dropped"]
pub struct Suppression<'a> {
	state: &'a Cell<TranslatorState>,
	previous: TranslatorState,
}

impl<'a> Suppression<'a> {
	/// Suppresses encoding until the returned guard is dropped.
	pub fn enter(state: &'a Cell<TranslatorState>) -> Self {
		let previous = state.replace(TranslatorState::Suppressed);
		Self { state, previous }
	}
}

impl Drop for Suppression<'_> {
	fn drop(&mut self) {
		if self.state.get() == TranslatorState::Suppressed {
			self.state.set(self.previous);
		}
	}
}
