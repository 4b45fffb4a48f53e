//! Change-to-operation encoder.

use tandem_primitives::{LineSource, LinearOperation, to_offset};

use crate::change::EditorChange;

/// Encodes one editor change as a linear operation.
///
/// `before` is the buffer as it stood before the change. Only the lines
/// above `change.from.line` are read, and the change leaves those
/// untouched, so the post-change buffer is an equally valid source.
///
/// The result is at most a retain, a delete and an insert, in that order.
/// A multi-line replacement collapses into one delete and one insert.
pub fn encode_change<S: LineSource + ?Sized>(change: &EditorChange, before: &S) -> LinearOperation {
	let mut op = LinearOperation::new();
	op.retain(to_offset(change.from, before));

	if change.to != change.from {
		op.delete(change.removed_len());
	}

	op.insert(change.inserted_text());
	op
}
