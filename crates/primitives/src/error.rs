//! Errors raised while decoding or applying linear operations.

use thiserror::Error;

use crate::range::{CharIdx, CharLen};

/// Errors that can occur when decoding or applying a [`crate::LinearOperation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
	/// The wire value is not a sequence of components.
	#[error("expected an array of text operation components, got {found}")]
	NotASequence {
		/// Compact rendering of the rejected value.
		found: String,
	},

	/// A component matches none of the retain, insert or delete shapes.
	#[error("component {index} is not a retain, insert or delete: {found}")]
	MalformedComponent {
		/// Position of the component within the operation.
		index: usize,
		/// Compact rendering of the rejected component.
		found: String,
	},

	/// A retain or delete reaches past the end of the text.
	#[error("operation reaches offset {end} but the text has {len} characters")]
	OutOfBounds {
		/// First offset past the consumed span.
		end: CharIdx,
		/// Length of the text the operation was applied to.
		len: CharLen,
	},
}
