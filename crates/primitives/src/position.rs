//! Offset calculator: editor `(line, column)` positions to flat character
//! offsets and back.
//!
//! Lines are separated by a single `\n`, which counts as one character of
//! the flat text. Columns and lengths are measured in `char`s.

use serde::{Deserialize, Serialize};

use crate::range::{CharIdx, CharLen};

/// An editor position in line/column coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character offset in the line.
	pub column: usize,
}

impl Position {
	/// Creates a new position.
	pub const fn new(line: usize, column: usize) -> Self {
		Self { line, column }
	}
}

/// Read-only access to the lines backing an offset computation.
///
/// The provided methods walk lines from the top; implementors with an index
/// (such as a rope) override them.
pub trait LineSource {
	/// Number of lines, including the empty line after a trailing newline.
	fn line_count(&self) -> usize;

	/// Length of `line` in characters, excluding its terminator.
	fn line_len(&self, line: usize) -> CharLen;

	/// Flat offset of `pos`: the lengths of all preceding lines plus one
	/// terminator each, plus the column.
	fn offset_of(&self, pos: Position) -> CharIdx {
		(0..pos.line).map(|line| self.line_len(line) + 1).sum::<CharLen>() + pos.column
	}

	/// Position of a flat offset.
	///
	/// Offsets past the end clamp to the end of the last line.
	fn position_of(&self, offset: CharIdx) -> Position {
		let count = self.line_count();
		let mut remaining = offset;
		for line in 0..count {
			let len = self.line_len(line);
			if remaining <= len || line + 1 == count {
				return Position::new(line, remaining.min(len));
			}
			remaining -= len + 1;
		}
		Position::default()
	}
}

/// Converts `pos` to a flat character offset within `source`.
///
/// Callers guarantee that `pos` lies within the buffer.
pub fn to_offset<S: LineSource + ?Sized>(pos: Position, source: &S) -> CharIdx {
	source.offset_of(pos)
}

/// Converts a flat character offset to a position within `source`.
pub fn from_offset<S: LineSource + ?Sized>(offset: CharIdx, source: &S) -> Position {
	source.position_of(offset)
}

impl LineSource for [String] {
	fn line_count(&self) -> usize {
		self.len()
	}

	fn line_len(&self, line: usize) -> CharLen {
		self.get(line).map_or(0, |text| text.chars().count())
	}
}

impl LineSource for Vec<String> {
	fn line_count(&self) -> usize {
		self.len()
	}

	fn line_len(&self, line: usize) -> CharLen {
		self.as_slice().line_len(line)
	}
}

impl LineSource for [&str] {
	fn line_count(&self) -> usize {
		self.len()
	}

	fn line_len(&self, line: usize) -> CharLen {
		self.get(line).map_or(0, |text| text.chars().count())
	}
}
