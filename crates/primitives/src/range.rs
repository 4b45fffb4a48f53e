/// Cursor offset counted in Unicode scalar values from the start of the text.
///
/// Retain, insert and delete all move or read a cursor of this type.
pub type CharIdx = usize;

/// Span length in Unicode scalar values: the count carried by a retain or a
/// delete, or the length of one line.
pub type CharLen = usize;
