//! The editor contract and an in-memory rope-backed editor.

use std::fmt;

use tandem_primitives::{CharIdx, CharLen, LineSource, ListenerId, Position, Rope};

use crate::change::EditorChange;

/// Callback invoked after every buffer mutation.
///
/// The editor hands itself to the listener so the listener can read or
/// repair the buffer without reaching for a second handle to it.
pub type ChangeListener = Box<dyn FnMut(&mut dyn Editor, &EditorChange)>;

/// An interactive editing surface the translator keeps in step.
///
/// Every mutation, whether typed by a user or made through this trait,
/// is reported synchronously to each attached [`ChangeListener`].
pub trait Editor: LineSource {
	/// Returns the whole buffer as a string.
	fn value(&self) -> String;

	/// Replaces the whole buffer.
	fn set_value(&mut self, text: &str);

	/// Replaces the range `[from, to)` with `text`.
	fn replace_range(&mut self, text: &str, from: Position, to: Position);

	/// Attaches a change listener.
	fn on_change(&mut self, listener: ChangeListener) -> ListenerId;

	/// Detaches a change listener, returning whether it was attached.
	fn off_change(&mut self, id: ListenerId) -> bool;
}

/// A headless editor backed by a [`Rope`].
///
/// Reports changes the way an interactive editor does: one notification
/// per mutation, positions clipped to the buffer, no notification for an
/// edit that changes nothing. A listener attached during dispatch first
/// hears the next change; one detached during dispatch hears no more.
#[derive(Default)]
pub struct RopeEditor {
	text: Rope,
	listeners: Vec<(ListenerId, ChangeListener)>,
	/// Listeners currently taken out for dispatch, outermost first.
	in_dispatch: Vec<ListenerId>,
	/// Listeners detached while taken out for dispatch.
	detached: Vec<ListenerId>,
	next_listener: u64,
}

impl RopeEditor {
	/// Creates an empty editor.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an editor holding `text`.
	pub fn with_text(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			..Self::default()
		}
	}

	/// Returns the backing rope.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Number of attached listeners.
	pub fn listener_count(&self) -> usize {
		(self.listeners.len() + self.in_dispatch.len()).saturating_sub(self.detached.len())
	}

	fn clip(&self, pos: Position) -> Position {
		let last = self.text.len_lines() - 1;
		if pos.line > last {
			return Position::new(last, self.line_len(last));
		}
		Position::new(pos.line, pos.column.min(self.line_len(pos.line)))
	}

	fn end(&self) -> Position {
		self.position_of(self.text.len_chars())
	}

	fn emit(&mut self, change: &EditorChange) {
		let mut active = std::mem::take(&mut self.listeners);
		let mark = self.in_dispatch.len();
		self.in_dispatch.extend(active.iter().map(|(id, _)| *id));

		for (id, listener) in active.iter_mut() {
			if self.detached.contains(id) {
				continue;
			}
			listener(self, change);
		}

		self.in_dispatch.truncate(mark);
		active.append(&mut self.listeners);
		if mark == 0 {
			let detached = std::mem::take(&mut self.detached);
			active.retain(|(id, _)| !detached.contains(id));
		}
		self.listeners = active;
	}
}

impl fmt::Debug for RopeEditor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RopeEditor")
			.field("text", &self.text.to_string())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl LineSource for RopeEditor {
	fn line_count(&self) -> usize {
		self.text.line_count()
	}

	fn line_len(&self, line: usize) -> CharLen {
		self.text.line_len(line)
	}

	fn offset_of(&self, pos: Position) -> CharIdx {
		self.text.offset_of(pos)
	}

	fn position_of(&self, offset: CharIdx) -> Position {
		self.text.position_of(offset)
	}
}

impl Editor for RopeEditor {
	fn value(&self) -> String {
		self.text.to_string()
	}

	fn set_value(&mut self, text: &str) {
		let end = self.end();
		self.replace_range(text, Position::default(), end);
	}

	fn replace_range(&mut self, text: &str, from: Position, to: Position) {
		let (from, to) = if to < from { (to, from) } else { (from, to) };
		let (from, to) = (self.clip(from), self.clip(to));
		if from == to && text.is_empty() {
			return;
		}

		let start = self.text.offset_of(from);
		let end = self.text.offset_of(to);
		let removed = self.text.slice(start..end).to_string();
		self.text.remove(start..end);
		self.text.insert(start, text);

		let change = EditorChange::new(from, to, &removed, text);
		self.emit(&change);
	}

	fn on_change(&mut self, listener: ChangeListener) -> ListenerId {
		let id = ListenerId::next(&mut self.next_listener);
		self.listeners.push((id, listener));
		id
	}

	fn off_change(&mut self, id: ListenerId) -> bool {
		if let Some(index) = self.listeners.iter().position(|(l, _)| *l == id) {
			self.listeners.remove(index);
			return true;
		}
		if self.in_dispatch.contains(&id) && !self.detached.contains(&id) {
			self.detached.push(id);
			return true;
		}
		false
	}
}
