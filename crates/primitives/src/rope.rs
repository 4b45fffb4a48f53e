//! Rope utilities and extensions.

use ropey::{Rope, RopeSlice};

use crate::position::{LineSource, Position};
use crate::range::{CharIdx, CharLen};

/// Returns the number of lines, including the empty line after a trailing newline.
#[inline]
pub fn visible_line_count(text: RopeSlice) -> usize {
	text.len_lines()
}

/// Splits a rope into owned line strings without terminators.
///
/// The result always has [`visible_line_count`] entries.
pub fn lines_of(text: RopeSlice) -> Vec<String> {
	(0..text.len_lines())
		.map(|line| {
			let len = text.line_len(line);
			let start = text.line_to_char(line);
			text.slice(start..start + len).to_string()
		})
		.collect()
}

impl LineSource for RopeSlice<'_> {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_len(&self, line: usize) -> CharLen {
		if line >= self.len_lines() {
			return 0;
		}
		let start = self.line_to_char(line);
		let end = if line + 1 < self.len_lines() {
			self.line_to_char(line + 1) - 1
		} else {
			self.len_chars()
		};
		end - start
	}

	fn offset_of(&self, pos: Position) -> CharIdx {
		let line = pos.line.min(self.len_lines() - 1);
		self.line_to_char(line) + pos.column
	}

	fn position_of(&self, offset: CharIdx) -> Position {
		let offset = offset.min(self.len_chars());
		let line = self.char_to_line(offset);
		Position::new(line, offset - self.line_to_char(line))
	}
}

impl LineSource for Rope {
	fn line_count(&self) -> usize {
		self.len_lines()
	}

	fn line_len(&self, line: usize) -> CharLen {
		self.slice(..).line_len(line)
	}

	fn offset_of(&self, pos: Position) -> CharIdx {
		self.slice(..).offset_of(pos)
	}

	fn position_of(&self, offset: CharIdx) -> Position {
		self.slice(..).position_of(offset)
	}
}
